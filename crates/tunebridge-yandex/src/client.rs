// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{Result, YandexError};
use crate::models::{SearchResponse, Track, TracksResponse};
use crate::pacer::RequestPacer;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

const YANDEX_API_BASE: &str = "https://api.music.yandex.net";
const USER_AGENT: &str = concat!("Tunebridge/", env!("CARGO_PKG_VERSION"));

/// Yandex Music API client with minimum-interval request pacing.
#[derive(Debug, Clone)]
pub struct YandexMusicClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    pacer: RequestPacer,
}

impl YandexMusicClient {
    /// Create a client with default settings and no authorization token.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> YandexMusicClientBuilder {
        YandexMusicClientBuilder::default()
    }

    /// Look up a track by id, unwrapping the `result` envelope.
    ///
    /// The endpoint answers an array; an empty array for a known-shape
    /// response is reported as `NotFound`.
    pub async fn lookup_track(&self, id: &str) -> Result<Track> {
        let url = format!("{}/tracks/{}", self.base_url, id);
        let response: TracksResponse = self.get(&url).await?;

        response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| YandexError::NotFound(format!("track {id}")))
    }

    /// Full-text track search, at most `limit` results.
    pub async fn search_tracks(&self, text: &str, limit: u32) -> Result<Vec<Track>> {
        let mut url = Url::parse(&format!("{}/search", self.base_url))
            .map_err(|e| YandexError::InvalidResponse(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("text", text)
            .append_pair("type", "track")
            .append_pair("page", "0");

        let response: SearchResponse = self.get(url.as_str()).await?;
        let mut tracks = response
            .result
            .tracks
            .map(|page| page.results)
            .unwrap_or_default();
        tracks.truncate(limit as usize);
        Ok(tracks)
    }

    /// Internal method to perform paced GET requests.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.pacer.pace().await;

        trace!(target: "yandex", "GET {}", url);

        let mut request = self.client.get(url).header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("OAuth {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(target: "yandex", "response status: {}", status);

        if status == 401 || status == 403 {
            return Err(YandexError::Unauthorized);
        }

        if status == 404 {
            return Err(YandexError::NotFound(url.to_string()));
        }

        if status == 429 {
            return Err(YandexError::RateLimitExceeded);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(YandexError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        trace!(target: "yandex", "response body: {}", body);

        serde_json::from_str(&body)
            .map_err(|e| YandexError::InvalidResponse(format!("failed to parse response: {}", e)))
    }
}

/// Builder for configuring a Yandex Music client.
#[derive(Debug)]
pub struct YandexMusicClientBuilder {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
    request_interval: Duration,
}

impl Default for YandexMusicClientBuilder {
    fn default() -> Self {
        Self {
            base_url: YANDEX_API_BASE.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            request_interval: Duration::from_millis(250),
        }
    }
}

impl YandexMusicClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the pre-issued OAuth token attached to each request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the minimum interval between requests.
    pub fn request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }

    /// Build the Yandex Music client.
    pub fn build(self) -> Result<YandexMusicClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(YandexMusicClient {
            client,
            base_url: self.base_url,
            token: self.token,
            pacer: RequestPacer::new(self.request_interval),
        })
    }
}
