//! Scoring module - line clear points
//!
//! A single lock that clears `n` lines is worth `100 * n²`:
//! 1 → 100, 2 → 400, 3 → 900, 4 → 1600. Nothing else scores.

use crate::types::LINE_CLEAR_BASE;

/// Points for clearing `lines` rows with one lock
pub fn line_clear_score(lines: usize) -> u32 {
    let n = lines.min(u16::MAX as usize) as u32;
    LINE_CLEAR_BASE.saturating_mul(n.saturating_mul(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_table() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 400);
        assert_eq!(line_clear_score(3), 900);
        assert_eq!(line_clear_score(4), 1600);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        assert_eq!(line_clear_score(usize::MAX), u32::MAX);
    }
}
