//! Scoring module - line clear points
//!
//! One line is worth 100, two lines 300, and from three lines on every line is
//! worth 500. Rows and columns count the same.

use crate::types::{DOUBLE_LINE_SCORE, MULTI_LINE_SCORE_PER_LINE, SINGLE_LINE_SCORE};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub rows: u32,
    pub cols: u32,
    pub total: u32,
}

impl ScoreResult {
    pub fn lines(&self) -> u32 {
        self.rows + self.cols
    }
}

/// Points for clearing `lines` lines in one placement
pub fn calculate_line_score(lines: u32) -> u32 {
    match lines {
        0 => 0,
        1 => SINGLE_LINE_SCORE,
        2 => DOUBLE_LINE_SCORE,
        n => MULTI_LINE_SCORE_PER_LINE.saturating_mul(n),
    }
}

/// Score for a clearing pass that removed `rows` rows and `cols` columns
pub fn calculate_score(rows: u32, cols: u32) -> ScoreResult {
    ScoreResult {
        rows,
        cols,
        total: calculate_line_score(rows + cols),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_table() {
        assert_eq!(calculate_line_score(0), 0);
        assert_eq!(calculate_line_score(1), 100);
        assert_eq!(calculate_line_score(2), 300);
        assert_eq!(calculate_line_score(3), 1500);
        assert_eq!(calculate_line_score(4), 2000);
        assert_eq!(calculate_line_score(20), 10_000);
    }

    #[test]
    fn test_multi_line_bonus_is_superlinear() {
        for n in 1..20 {
            assert!(calculate_line_score(n + 1) > calculate_line_score(n));
        }
        assert!(calculate_line_score(2) > 2 * calculate_line_score(1));
    }

    #[test]
    fn test_rows_and_columns_count_alike() {
        assert_eq!(calculate_score(1, 1).total, 300);
        assert_eq!(calculate_score(2, 0).total, 300);
        assert_eq!(calculate_score(0, 2).total, 300);

        let result = calculate_score(2, 1);
        assert_eq!(result.lines(), 3);
        assert_eq!(result.total, 1500);
    }
}
