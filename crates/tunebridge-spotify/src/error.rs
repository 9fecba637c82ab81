// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpotifyError>;

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("access token missing or expired")]
    Unauthorized,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("invalid response from Spotify API: {0}")]
    InvalidResponse(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
}
