// SPDX-License-Identifier: GPL-3.0-or-later

//! Catalog capability shared by both platform clients.
//!
//! The two clients expose the same two operations with platform-specific
//! payloads; this trait is the single seam the conversion flow programs
//! against, with the raw payloads already normalized to [`SongRecord`].

use async_trait::async_trait;
use thiserror::Error;
use tunebridge_domain::{Platform, SongRecord};
use tunebridge_spotify::{SpotifyClient, SpotifyError};
use tunebridge_yandex::{YandexError, YandexMusicClient};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("spotify request failed: {0}")]
    Spotify(#[from] SpotifyError),

    #[error("yandex music request failed: {0}")]
    Yandex(#[from] YandexError),
}

/// Lookup-by-id and text-search over one platform's catalog.
#[async_trait]
pub trait MusicCatalog: Send + Sync {
    fn platform(&self) -> Platform;

    /// Resolve a track id to a normalized record; `Ok(None)` when the
    /// catalog does not know the id.
    async fn track_by_id(&self, id: &str) -> Result<Option<SongRecord>, CatalogError>;

    /// Text search, at most `limit` normalized records.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SongRecord>, CatalogError>;
}

#[async_trait]
impl MusicCatalog for SpotifyClient {
    fn platform(&self) -> Platform {
        Platform::Spotify
    }

    async fn track_by_id(&self, id: &str) -> Result<Option<SongRecord>, CatalogError> {
        match self.lookup_track(id).await {
            Ok(track) => Ok(Some(track.into_song_record())),
            Err(SpotifyError::NotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SongRecord>, CatalogError> {
        let tracks = self.search_tracks(query, limit).await?;
        Ok(tracks
            .into_iter()
            .map(tunebridge_spotify::Track::into_song_record)
            .collect())
    }
}

#[async_trait]
impl MusicCatalog for YandexMusicClient {
    fn platform(&self) -> Platform {
        Platform::YandexMusic
    }

    async fn track_by_id(&self, id: &str) -> Result<Option<SongRecord>, CatalogError> {
        match self.lookup_track(id).await {
            Ok(track) => Ok(Some(track.into_song_record())),
            Err(YandexError::NotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<SongRecord>, CatalogError> {
        let tracks = self.search_tracks(query, limit).await?;
        Ok(tracks
            .into_iter()
            .map(tunebridge_yandex::Track::into_song_record)
            .collect())
    }
}
