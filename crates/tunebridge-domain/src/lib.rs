// SPDX-License-Identifier: GPL-3.0-or-later
use serde::{Deserialize, Serialize};

// ============================================================================
// Platforms
// ============================================================================

/// The streaming platforms tunebridge converts between.
///
/// Conversion is always to the other platform, so the variant set doubles as
/// the dispatch table: adding a platform forces every `match` on this enum to
/// be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Spotify,
    YandexMusic,
}

impl Platform {
    /// The conversion target for a link originating on this platform.
    pub fn opposite(self) -> Self {
        match self {
            Self::Spotify => Self::YandexMusic,
            Self::YandexMusic => Self::Spotify,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Spotify => "Spotify",
            Self::YandexMusic => "Yandex Music",
        }
    }

    /// Marker used when formatting replies.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Spotify => "🟢",
            Self::YandexMusic => "🟡",
        }
    }

    /// Case-insensitive parse of the platform tags accepted at the API edge.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "spotify" => Some(Self::Spotify),
            "yandex" | "yandex_music" | "yandex-music" | "yandexmusic" => Some(Self::YandexMusic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Song records
// ============================================================================

/// A track normalized out of one catalog's payload shape.
///
/// `name`, `artist`, and `album` are free-form text straight from the
/// catalog; a field the catalog did not provide is the empty string, never an
/// error. The remaining fields are carried for display and pass through
/// matching untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    pub platform: Platform,
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub url: String,
    pub artwork_url: Option<String>,
    pub preview_url: Option<String>,
}

impl SongRecord {
    pub fn new(
        platform: Platform,
        id: impl Into<String>,
        name: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            id: id.into(),
            name: name.into(),
            artist: artist.into(),
            album: album.into(),
            url: url.into(),
            artwork_url: None,
            preview_url: None,
        }
    }

    pub fn with_artwork_url(mut self, artwork_url: impl Into<String>) -> Self {
        self.artwork_url = Some(artwork_url.into());
        self
    }

    pub fn with_preview_url(mut self, preview_url: impl Into<String>) -> Self {
        self.preview_url = Some(preview_url.into());
        self
    }
}

// ============================================================================
// Match results
// ============================================================================

/// A candidate record annotated with its confidence score.
///
/// Produced per selection call; never persisted, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub song: SongRecord,
    pub match_score: u8,
}

// ============================================================================
// Tests
// ============================================================================
