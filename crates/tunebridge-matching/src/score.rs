// SPDX-License-Identifier: GPL-3.0-or-later

use strsim::sorensen_dice;
use tunebridge_domain::SongRecord;

// Weights sum to 1.0 so the weighted similarity stays in [0, 1].
const NAME_WEIGHT: f64 = 0.4;
const ARTIST_WEIGHT: f64 = 0.4;
const ALBUM_WEIGHT: f64 = 0.2;

/// Confidence in [0, 100] that two records describe the same track.
///
/// Name, artist, and album are each normalized independently and compared
/// with the Sørensen-Dice bigram coefficient; two fields that both
/// normalize to the empty string count as fully similar. The weighted sum
/// (name 0.4, artist 0.4, album 0.2) is scaled to 100 and rounded half away
/// from zero, so a raw 59.5 reports as 60.
///
/// An absent record on either side scores 0.
pub fn score(original: Option<&SongRecord>, candidate: Option<&SongRecord>) -> u8 {
    let (Some(original), Some(candidate)) = (original, candidate) else {
        return 0;
    };

    let name = field_similarity(&original.name, &candidate.name);
    let artist = field_similarity(&original.artist, &candidate.artist);
    let album = field_similarity(&original.album, &candidate.album);

    let weighted = name * NAME_WEIGHT + artist * ARTIST_WEIGHT + album * ALBUM_WEIGHT;
    (weighted * 100.0).round() as u8
}

fn field_similarity(original: &str, candidate: &str) -> f64 {
    sorensen_dice(&normalize_field(original), &normalize_field(candidate))
}

/// Lowercase, drop everything that is not alphanumeric or whitespace, trim.
fn normalize_field(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}
