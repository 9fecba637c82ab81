// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Deserializer};
use tunebridge_domain::{Platform, SongRecord};

const YANDEX_WEB_BASE: &str = "https://music.yandex.ru";

/// Track object from the Yandex Music API.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Track {
    /// Arrives as a JSON number on some endpoints and a string on others.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub albums: Vec<Album>,
    /// Protocol-less artwork template with a `%%` size placeholder.
    #[serde(rename = "coverUri", default)]
    pub cover_uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Album {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
}

/// Lookup envelope: `GET /tracks/{id}` answers `{"result": [track]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct TracksResponse {
    #[serde(default)]
    pub result: Vec<Track>,
}

/// Search envelope: `{"result": {"tracks": {"results": [...]}}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub result: SearchResult,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResult {
    #[serde(default)]
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackPage {
    #[serde(default)]
    pub results: Vec<Track>,
}

impl Track {
    /// Normalize into the platform-agnostic record the matching engine
    /// consumes. The first artist is the primary performer; the web link is
    /// built from the first album when one is present.
    pub fn into_song_record(self) -> SongRecord {
        let artist = self
            .artists
            .first()
            .map(|artist| artist.name.clone())
            .unwrap_or_default();

        let album_title = self
            .albums
            .first()
            .and_then(|album| album.title.clone())
            .unwrap_or_default();

        let url = match self.albums.first() {
            Some(album) => format!("{}/album/{}/track/{}", YANDEX_WEB_BASE, album.id, self.id),
            None => format!("{}/track/{}", YANDEX_WEB_BASE, self.id),
        };

        let artwork_url = self
            .cover_uri
            .as_ref()
            .map(|uri| format!("https://{}", uri.replace("%%", "400x400")));

        let mut record = SongRecord::new(
            Platform::YandexMusic,
            self.id,
            self.title,
            artist,
            album_title,
            url,
        );
        record.artwork_url = artwork_url;
        record
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}
