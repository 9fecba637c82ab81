// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{Result, SpotifyError};
use crate::models::{SearchResponse, Track};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, trace};
use url::Url;

const SPOTIFY_API_BASE: &str = "https://api.spotify.com/v1";
const USER_AGENT: &str = concat!("Tunebridge/", env!("CARGO_PKG_VERSION"));

/// Spotify Web API client with bounded request concurrency.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
    limiter: Arc<Semaphore>,
}

impl SpotifyClient {
    /// Create a client with default settings and no access token.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> SpotifyClientBuilder {
        SpotifyClientBuilder::default()
    }

    /// Look up a track by its Spotify id.
    ///
    /// # Example
    /// ```no_run
    /// # use tunebridge_spotify::SpotifyClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SpotifyClient::builder().access_token("token").build()?;
    /// let track = client.lookup_track("0GjEhVFGZW8afUYGChu3Rr").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn lookup_track(&self, id: &str) -> Result<Track> {
        let url = format!("{}/tracks/{}", self.base_url, id);
        self.get(&url).await
    }

    /// Full-text track search, at most `limit` results.
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        let mut url = Url::parse(&format!("{}/search", self.base_url))
            .map_err(|e| SpotifyError::InvalidResponse(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("type", "track")
            .append_pair("limit", &limit.to_string());

        let response: SearchResponse = self.get(url.as_str()).await?;
        Ok(response.tracks.map(|page| page.items).unwrap_or_default())
    }

    /// Internal method to perform concurrency-limited GET requests.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let _permit = self.limiter.acquire().await.expect("semaphore closed");

        trace!(target: "spotify", "GET {}", url);

        let mut request = self.client.get(url).header("User-Agent", USER_AGENT);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(target: "spotify", "response status: {}", status);

        if status == 401 {
            return Err(SpotifyError::Unauthorized);
        }

        if status == 404 {
            return Err(SpotifyError::NotFound(url.to_string()));
        }

        if status == 429 {
            return Err(SpotifyError::RateLimitExceeded);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SpotifyError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        trace!(target: "spotify", "response body: {}", body);

        serde_json::from_str(&body).map_err(|e| {
            SpotifyError::InvalidResponse(format!("failed to parse response: {}", e))
        })
    }
}

/// Builder for configuring a Spotify client.
#[derive(Debug)]
pub struct SpotifyClientBuilder {
    base_url: String,
    access_token: Option<String>,
    timeout: Duration,
    max_concurrent_requests: usize,
}

impl Default for SpotifyClientBuilder {
    fn default() -> Self {
        Self {
            base_url: SPOTIFY_API_BASE.to_string(),
            access_token: None,
            timeout: Duration::from_secs(30),
            max_concurrent_requests: 2,
        }
    }
}

impl SpotifyClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the pre-issued access token attached as a bearer credential.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of requests allowed in flight at once.
    pub fn max_concurrent_requests(mut self, max: usize) -> Self {
        self.max_concurrent_requests = max.max(1);
        self
    }

    /// Build the Spotify client.
    pub fn build(self) -> Result<SpotifyClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(SpotifyClient {
            client,
            base_url: self.base_url,
            access_token: self.access_token,
            limiter: Arc::new(Semaphore::new(self.max_concurrent_requests)),
        })
    }
}
