// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversion orchestration: source lookup, opposite-catalog search, match
//! selection, and reply formatting.
//!
//! Transport failures on the search side are resolved to an empty candidate
//! list before the matching core sees them; the core only ever receives a
//! materialized record and a (possibly empty) candidate sequence.

use crate::catalog::{CatalogError, MusicCatalog};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use tunebridge_domain::{MatchResult, Platform, SongRecord};
use tunebridge_matching::{confidence_label, select_best};

/// Errors that can occur while resolving the source side of a conversion.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("track {track_id} not found on {platform}")]
    TrackNotFound { platform: Platform, track_id: String },

    #[error("source catalog lookup failed: {0}")]
    SourceLookup(#[from] CatalogError),
}

/// Outcome of one conversion call.
///
/// `result` being `None` is the normal "no sufficiently confident match"
/// outcome, not an error; callers render the fallback line for it.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub source: SongRecord,
    pub target_platform: Platform,
    pub result: Option<MatchResult>,
}

impl Conversion {
    /// Reply rendered for display:
    /// `<source emoji/name> → <target emoji/name> (<confidence label>)` on
    /// one line and the converted link on the next.
    pub fn reply_text(&self) -> String {
        let source = self.source.platform;
        match &self.result {
            Some(matched) => format!(
                "{} {} → {} {} ({})\n{}",
                source.emoji(),
                source.display_name(),
                self.target_platform.emoji(),
                self.target_platform.display_name(),
                confidence_label(i32::from(matched.match_score)),
                matched.song.url,
            ),
            None => format!(
                "No confident match for \"{}\" by {} on {}.",
                self.source.name,
                self.source.artist,
                self.target_platform.display_name(),
            ),
        }
    }
}

/// Converts a track from one platform's catalog to the other's.
pub struct ConversionService {
    spotify: Arc<dyn MusicCatalog>,
    yandex: Arc<dyn MusicCatalog>,
    search_limit: u32,
}

impl ConversionService {
    pub fn new(
        spotify: Arc<dyn MusicCatalog>,
        yandex: Arc<dyn MusicCatalog>,
        search_limit: u32,
    ) -> Self {
        Self {
            spotify,
            yandex,
            search_limit,
        }
    }

    fn catalog(&self, platform: Platform) -> &Arc<dyn MusicCatalog> {
        match platform {
            Platform::Spotify => &self.spotify,
            Platform::YandexMusic => &self.yandex,
        }
    }

    /// Convert the track `track_id` on `source` to the opposite platform.
    ///
    /// # Returns
    ///
    /// * `Ok(Conversion)` - source resolved; `result` carries the match or
    ///   `None` when nothing scored high enough
    /// * `Err(ConversionError::TrackNotFound)` - the source catalog does not
    ///   know the id
    /// * `Err(ConversionError::SourceLookup)` - the source catalog could not
    ///   be reached
    pub async fn convert(
        &self,
        source: Platform,
        track_id: &str,
    ) -> Result<Conversion, ConversionError> {
        let original = self
            .catalog(source)
            .track_by_id(track_id)
            .await?
            .ok_or_else(|| ConversionError::TrackNotFound {
                platform: source,
                track_id: track_id.to_string(),
            })?;

        let target = source.opposite();
        let query = format!("{} {}", original.artist, original.name)
            .trim()
            .to_string();

        debug!(
            target: "conversion",
            source = %source,
            track_id = %original.id,
            query = %query,
            "searching target catalog"
        );

        let candidates = match self.catalog(target).search(&query, self.search_limit).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(
                    target: "conversion",
                    error = %err,
                    "target catalog search failed, treating as no candidates"
                );
                Vec::new()
            }
        };

        let result = select_best(&original, &candidates);

        match &result {
            Some(matched) => debug!(
                target: "conversion",
                score = matched.match_score,
                target_id = %matched.song.id,
                "match selected"
            ),
            None => debug!(
                target: "conversion",
                candidates = candidates.len(),
                "no candidate cleared the confidence floor"
            ),
        }

        Ok(Conversion {
            source: original,
            target_platform: target,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tunebridge_spotify::SpotifyError;

    struct FakeCatalog {
        platform: Platform,
        tracks: Vec<SongRecord>,
        fail_search: bool,
    }

    impl FakeCatalog {
        fn new(platform: Platform, tracks: Vec<SongRecord>) -> Self {
            Self {
                platform,
                tracks,
                fail_search: false,
            }
        }

        fn failing_search(platform: Platform) -> Self {
            Self {
                platform,
                tracks: Vec::new(),
                fail_search: true,
            }
        }
    }

    #[async_trait]
    impl MusicCatalog for FakeCatalog {
        fn platform(&self) -> Platform {
            self.platform
        }

        async fn track_by_id(&self, id: &str) -> Result<Option<SongRecord>, CatalogError> {
            Ok(self.tracks.iter().find(|track| track.id == id).cloned())
        }

        async fn search(&self, _query: &str, limit: u32) -> Result<Vec<SongRecord>, CatalogError> {
            if self.fail_search {
                return Err(CatalogError::Spotify(SpotifyError::RateLimitExceeded));
            }
            Ok(self.tracks.iter().take(limit as usize).cloned().collect())
        }
    }

    fn spotify_imagine() -> SongRecord {
        SongRecord::new(
            Platform::Spotify,
            "0GjEhVFGZW8afUYGChu3Rr",
            "Imagine",
            "John Lennon",
            "Imagine",
            "https://open.spotify.com/track/0GjEhVFGZW8afUYGChu3Rr",
        )
    }

    fn yandex_record(id: &str, name: &str, artist: &str, album: &str) -> SongRecord {
        SongRecord::new(
            Platform::YandexMusic,
            id,
            name,
            artist,
            album,
            format!("https://music.yandex.ru/track/{id}"),
        )
    }

    fn service(spotify: FakeCatalog, yandex: FakeCatalog) -> ConversionService {
        ConversionService::new(Arc::new(spotify), Arc::new(yandex), 5)
    }

    #[tokio::test]
    async fn converts_to_the_best_candidate_on_the_opposite_platform() {
        let spotify = FakeCatalog::new(Platform::Spotify, vec![spotify_imagine()]);
        let yandex = FakeCatalog::new(
            Platform::YandexMusic,
            vec![
                yandex_record("1", "Imagine", "John Lennon", "The John Lennon Collection"),
                yandex_record("2", "Imagine", "John Lennon", "Imagine"),
                yandex_record("3", "Yesterday", "The Beatles", "Help!"),
            ],
        );

        let conversion = service(spotify, yandex)
            .convert(Platform::Spotify, "0GjEhVFGZW8afUYGChu3Rr")
            .await
            .unwrap();

        assert_eq!(conversion.target_platform, Platform::YandexMusic);
        let matched = conversion.result.as_ref().unwrap();
        assert_eq!(matched.song.id, "2");
        assert!(matched.match_score > 90);

        let reply = conversion.reply_text();
        assert!(reply.contains("Spotify"));
        assert!(reply.contains("Yandex Music"));
        assert!(reply.contains("Exact match"));
        assert!(reply.ends_with("https://music.yandex.ru/track/2"));
    }

    #[tokio::test]
    async fn no_acceptable_candidate_yields_fallback_reply() {
        let spotify = FakeCatalog::new(Platform::Spotify, vec![spotify_imagine()]);
        let yandex = FakeCatalog::new(
            Platform::YandexMusic,
            vec![yandex_record("9", "Raspberry Beret", "Prince", "Around the World in a Day")],
        );

        let conversion = service(spotify, yandex)
            .convert(Platform::Spotify, "0GjEhVFGZW8afUYGChu3Rr")
            .await
            .unwrap();

        assert!(conversion.result.is_none());
        assert_eq!(
            conversion.reply_text(),
            "No confident match for \"Imagine\" by John Lennon on Yandex Music."
        );
    }

    #[tokio::test]
    async fn search_failure_is_resolved_to_no_match() {
        let spotify = FakeCatalog::new(Platform::Spotify, vec![spotify_imagine()]);
        let yandex = FakeCatalog::failing_search(Platform::YandexMusic);

        let conversion = service(spotify, yandex)
            .convert(Platform::Spotify, "0GjEhVFGZW8afUYGChu3Rr")
            .await
            .unwrap();

        assert!(conversion.result.is_none());
    }

    #[tokio::test]
    async fn unknown_source_track_is_reported() {
        let spotify = FakeCatalog::new(Platform::Spotify, Vec::new());
        let yandex = FakeCatalog::new(Platform::YandexMusic, Vec::new());

        let result = service(spotify, yandex)
            .convert(Platform::Spotify, "missing")
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ConversionError::TrackNotFound { platform: Platform::Spotify, .. }
        ));
    }

    #[tokio::test]
    async fn conversion_runs_in_both_directions() {
        let spotify = FakeCatalog::new(Platform::Spotify, vec![spotify_imagine()]);
        let yandex = FakeCatalog::new(
            Platform::YandexMusic,
            vec![yandex_record("2", "Imagine", "John Lennon", "Imagine")],
        );

        let conversion = service(spotify, yandex)
            .convert(Platform::YandexMusic, "2")
            .await
            .unwrap();

        assert_eq!(conversion.source.platform, Platform::YandexMusic);
        assert_eq!(conversion.target_platform, Platform::Spotify);
        let matched = conversion.result.as_ref().unwrap();
        assert_eq!(matched.song.id, "0GjEhVFGZW8afUYGChu3Rr");
    }
}
