//! Scoring module - line points, level progression and gravity speed
//!
//! The rules are linear: every cleared line is worth `100 * level`, with no
//! bonus for clearing several lines at once.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LEVEL_SCORE_STEP, LINE_POINTS,
};

/// Points for clearing `lines` rows in one lock at `level`
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines.saturating_mul(LINE_POINTS).saturating_mul(level)
}

/// Level after a scoring lock.
///
/// Advances by one when `score >= level * 1000`. This is checked once per
/// lock, so a score that jumps past several thresholds still gains one level.
pub fn level_after_lock(score: u32, level: u32) -> u32 {
    if score >= level.saturating_mul(LEVEL_SCORE_STEP) {
        level + 1
    } else {
        level
    }
}

/// Gravity interval for a level: `max(100, 1000 - (level - 1) * 100)` ms
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_is_linear() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(4, 1), 400);
        assert_eq!(line_clear_score(2, 3), 600);
        // No cap on simultaneous lines.
        assert_eq!(line_clear_score(6, 2), 1200);
    }

    #[test]
    fn test_level_threshold() {
        assert_eq!(level_after_lock(999, 1), 1);
        assert_eq!(level_after_lock(1000, 1), 2);
        assert_eq!(level_after_lock(1999, 2), 2);
        assert_eq!(level_after_lock(2000, 2), 3);
    }

    #[test]
    fn test_level_advances_once_per_lock() {
        assert_eq!(level_after_lock(50_000, 1), 2);
    }

    #[test]
    fn test_drop_interval_curve() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(5), 600);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(500), 100);
    }

    #[test]
    fn test_drop_interval_never_increases() {
        let mut prev = drop_interval_ms(1);
        for level in 2..30 {
            let next = drop_interval_ms(level);
            assert!(next <= prev);
            prev = next;
        }
    }
}
