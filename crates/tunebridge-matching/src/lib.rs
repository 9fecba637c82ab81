// SPDX-License-Identifier: GPL-3.0-or-later

//! Fuzzy matching engine for cross-catalog track identification.
//!
//! Two catalogs rarely agree on how a track is written: casing,
//! punctuation, and album naming all drift, and some fields are simply
//! missing. The scorer reduces two records to a single 0-100 confidence,
//! the selector picks the best candidate from a search result page, and the
//! labeler renders a score for humans.
//!
//! Everything in this crate is a pure function: no I/O, no retained state,
//! and total over its inputs - absent records, empty fields, and empty
//! candidate lists are valid inputs with defined outputs, not errors.

pub mod confidence;
pub mod score;
pub mod select;

pub use confidence::confidence_label;
pub use score::score;
pub use select::select_best;
