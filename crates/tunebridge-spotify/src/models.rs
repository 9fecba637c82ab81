// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;
use tunebridge_domain::{Platform, SongRecord};

/// Track object from the Spotify Web API.
///
/// Only the fields the conversion flow reads are modeled; everything else
/// in the payload is ignored. Fields Spotify may omit (relinked or
/// market-restricted tracks) default so a sparse payload still parses.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub album: Option<AlbumRef>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

/// Simplified artist entry in a track's artist credit.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ArtistRef {
    pub name: String,
}

/// Simplified album attached to a track.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AlbumRef {
    pub name: String,
    /// Cover art, widest first per the API contract.
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

/// Search response wrapper (`type=track` requests only populate `tracks`).
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<Track>,
}

impl Track {
    /// Normalize into the platform-agnostic record the matching engine
    /// consumes. The first artist credit is taken as the primary performer;
    /// missing fields become empty strings.
    pub fn into_song_record(self) -> SongRecord {
        let artist = self
            .artists
            .first()
            .map(|credit| credit.name.clone())
            .unwrap_or_default();

        let (album, artwork_url) = match self.album {
            Some(album) => (
                album.name,
                album.images.into_iter().next().map(|image| image.url),
            ),
            None => (String::new(), None),
        };

        let url = self
            .external_urls
            .spotify
            .unwrap_or_else(|| format!("https://open.spotify.com/track/{}", self.id));

        let mut record =
            SongRecord::new(Platform::Spotify, self.id, self.name, artist, album, url);
        record.artwork_url = artwork_url;
        record.preview_url = self.preview_url;
        record
    }
}
