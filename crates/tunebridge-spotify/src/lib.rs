// SPDX-License-Identifier: GPL-3.0-or-later

//! Spotify Web API client for track lookup and search.
//!
//! Covers the two read operations the conversion flow needs: fetch a track
//! by its base-62 id and run a text search over the track catalog. The
//! client authenticates with a pre-issued access token supplied through
//! configuration; obtaining or refreshing that token is out of scope here.

pub mod client;
#[cfg(test)]
mod client_tests;
pub mod error;
pub mod models;

pub use client::SpotifyClient;
pub use error::{Result, SpotifyError};
pub use models::{SearchResponse, Track};
