// SPDX-License-Identifier: GPL-3.0-or-later

/// Human-readable label for a match score.
///
/// 98 and above reads as an exact match; below 60 the label carries a low
/// confidence warning. Total over all of `i32` - scores outside [0, 100]
/// cannot come out of the scorer but still format rather than panic.
pub fn confidence_label(score: i32) -> String {
    if score >= 98 {
        "Exact match".to_string()
    } else if score >= 60 {
        format!("{score}% match")
    } else {
        format!("{score}% match (low confidence)")
    }
}
