// SPDX-License-Identifier: GPL-3.0-or-later

//! Yandex Music API client for track lookup and search.
//!
//! The API wraps every payload in a `result` envelope and ships track ids
//! as either JSON numbers or strings depending on the endpoint; both quirks
//! are absorbed in the model layer so the rest of the workspace only sees
//! normalized records. Requests are paced to a minimum interval.

pub mod client;
pub mod error;
pub mod models;
pub mod pacer;

pub use client::YandexMusicClient;
pub use error::{Result, YandexError};
pub use models::Track;
