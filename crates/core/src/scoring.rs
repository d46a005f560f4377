//! Scoring module - line clears to points
//!
//! Only the number of rows removed by a single lock is scored. There is no
//! drop bonus, combo, back-to-back or level multiplier.

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows in one lock
///
/// 0 -> 0, 1 -> 100, 2 -> 300, 3 -> 500, 4 or more -> 800.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
    }

    #[test]
    fn test_more_than_four_lines_caps() {
        assert_eq!(line_clear_score(5), 800);
        assert_eq!(line_clear_score(22), 800);
    }
}
