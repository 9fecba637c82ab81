// SPDX-License-Identifier: GPL-3.0-or-later

use crate::score::score;
use tunebridge_domain::{MatchResult, SongRecord};

/// Pick the highest-scoring candidate that clears the confidence floor.
///
/// Every candidate is scored; only a strictly greater score replaces the
/// running best, so on a tie the earliest candidate in sequence order wins.
/// Returns `None` for an empty candidate list or when no candidate reaches
/// a score of 60.
pub fn select_best(original: &SongRecord, candidates: &[SongRecord]) -> Option<MatchResult> {
    if candidates.is_empty() {
        return None;
    }

    let mut best_score = 0u8;
    let mut best: Option<&SongRecord> = None;

    for candidate in candidates {
        let candidate_score = score(Some(original), Some(candidate));
        if candidate_score > best_score {
            best_score = candidate_score;
            best = Some(candidate);
        }
    }

    if best_score >= 60 {
        best.map(|song| MatchResult {
            song: song.clone(),
            match_score: best_score,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunebridge_domain::Platform;

    fn record(name: &str, artist: &str, album: &str) -> SongRecord {
        SongRecord::new(
            Platform::YandexMusic,
            "id",
            name,
            artist,
            album,
            "https://music.yandex.ru/track/1",
        )
    }

    fn record_with_id(id: &str, name: &str, artist: &str, album: &str) -> SongRecord {
        SongRecord::new(
            Platform::YandexMusic,
            id,
            name,
            artist,
            album,
            "https://music.yandex.ru/track/1",
        )
    }

    #[test]
    fn empty_candidates_yield_none() {
        let original = record("Imagine", "John Lennon", "Imagine");
        assert_eq!(select_best(&original, &[]), None);
    }

    #[test]
    fn below_threshold_yields_none() {
        let original = record("Imagine", "John Lennon", "Imagine");
        let candidates = vec![record("Smells Like Teen Spirit", "Nirvana", "Nevermind")];
        assert_eq!(select_best(&original, &candidates), None);
    }

    #[test]
    fn single_acceptable_candidate_is_returned_with_its_score() {
        let original = record("Imagine", "John Lennon", "Imagine");
        let candidates = vec![record("Imagine", "John Lennon", "Shaved Fish")];
        let result = select_best(&original, &candidates).unwrap();
        assert_eq!(result.song.album, "Shaved Fish");
        assert_eq!(
            result.match_score,
            score(Some(&original), Some(&candidates[0]))
        );
        assert!(result.match_score >= 60);
    }

    #[test]
    fn ties_keep_the_earliest_candidate() {
        let original = record("Imagine", "John Lennon", "Imagine");
        let candidates = vec![
            record_with_id("first", "Imagine", "John Lennon", "Imagine"),
            record_with_id("second", "Imagine", "John Lennon", "Imagine"),
        ];
        let result = select_best(&original, &candidates).unwrap();
        assert_eq!(result.song.id, "first");
        assert_eq!(result.match_score, 100);
    }

    #[test]
    fn every_candidate_is_considered() {
        let original = record("Imagine", "John Lennon", "Imagine");
        let candidates = vec![
            record("Jealous Guy", "John Lennon", "Imagine"),
            record("Oh My Love", "John Lennon", "Imagine"),
            record("Imagine", "John Lennon", "Imagine"),
        ];
        let result = select_best(&original, &candidates).unwrap();
        assert_eq!(result.song.name, "Imagine");
        assert_eq!(result.match_score, 100);
    }

    #[test]
    fn exact_album_match_beats_compilation() {
        let original = record("Imagine", "John Lennon", "Imagine");
        let candidates = vec![
            record("Imagine", "John Lennon", "The John Lennon Collection"),
            record("Imagine", "John Lennon", "Imagine"),
            record("Yesterday", "The Beatles", "Help!"),
        ];
        let result = select_best(&original, &candidates).unwrap();
        assert_eq!(result.song.album, "Imagine");
        assert!(result.match_score > 90);
    }
}
