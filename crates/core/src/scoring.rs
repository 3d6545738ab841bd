//! Scoring module - row-clear points, leveling and the gravity curve
//!
//! - Points for a clear are `level * multiplier(rows)` with multipliers
//!   1: 100, 2: 300, 3: 500, 4: 800. More than four rows at once only happens
//!   after direct playfield edits and scores as four.
//! - The level starts at 1 and rises by one whenever the running row total
//!   reaches the threshold; the threshold then grows by `new_level * 5`.
//!   Level 15 is the cap.
//! - Gravity is `(0.8 - (level - 1) * 0.007) ^ (level - 1)` seconds per row.

use std::time::Duration;

use crate::types::{
    BASE_DROP_FACTOR, LEVEL_SPEED_UP, LEVEL_UP_ROWS_FACTOR, MAX_LEVEL, ROW_CLEAR_MULTIPLIERS,
};

/// Points for clearing `rows` rows in one lock at `level`
pub fn calculate_line_score(rows: usize, level: u32) -> u64 {
    let rows = rows.min(ROW_CLEAR_MULTIPLIERS.len() - 1);
    ROW_CLEAR_MULTIPLIERS[rows] * u64::from(level)
}

/// Time between gravity steps at a level
pub fn drop_interval(level: u32) -> Duration {
    let steps = level.saturating_sub(1);
    let base = BASE_DROP_FACTOR - f64::from(steps) * LEVEL_SPEED_UP;
    Duration::from_secs_f64(base.powi(steps as i32))
}

/// Level and the row counters that drive it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelProgress {
    level: u32,
    rows_cleared_total: u32,
    rows_cleared_threshold: u32,
}

impl LevelProgress {
    pub fn new() -> Self {
        Self {
            level: 1,
            rows_cleared_total: 0,
            rows_cleared_threshold: LEVEL_UP_ROWS_FACTOR,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Rows counted toward leveling (stops counting at the level cap)
    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared_total
    }

    /// Total rows needed for the next level
    pub fn threshold(&self) -> u32 {
        self.rows_cleared_threshold
    }

    /// Count cleared rows; returns true if the level went up.
    ///
    /// At most one level is gained per call.
    pub fn record_rows(&mut self, rows: usize) -> bool {
        if self.level >= MAX_LEVEL {
            return false;
        }
        self.rows_cleared_total = self.rows_cleared_total.saturating_add(rows as u32);
        if self.rows_cleared_total < self.rows_cleared_threshold {
            return false;
        }
        self.level += 1;
        self.rows_cleared_threshold += self.level * LEVEL_UP_ROWS_FACTOR;
        true
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(calculate_line_score(0, 1), 0);
        assert_eq!(calculate_line_score(1, 1), 100);
        assert_eq!(calculate_line_score(2, 1), 300);
        assert_eq!(calculate_line_score(3, 1), 500);
        assert_eq!(calculate_line_score(4, 1), 800);

        assert_eq!(calculate_line_score(2, 3), 900);
        assert_eq!(calculate_line_score(4, 15), 12_000);
    }

    #[test]
    fn test_more_than_four_rows_scores_as_four() {
        assert_eq!(calculate_line_score(6, 2), calculate_line_score(4, 2));
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval(1), Duration::from_secs(1));

        let level_2 = drop_interval(2).as_secs_f64();
        assert!((level_2 - 0.793).abs() < 1e-6);

        let mut previous = drop_interval(1);
        for level in 2..=MAX_LEVEL {
            let interval = drop_interval(level);
            assert!(interval < previous, "level {}", level);
            assert!(interval > Duration::ZERO);
            previous = interval;
        }
    }

    #[test]
    fn test_level_progression() {
        let mut progress = LevelProgress::new();
        assert_eq!(progress.level(), 1);
        assert_eq!(progress.threshold(), 5);

        assert!(!progress.record_rows(4));
        assert!(progress.record_rows(1));
        assert_eq!(progress.level(), 2);
        // 5 + 2 * 5
        assert_eq!(progress.threshold(), 15);

        assert!(!progress.record_rows(9));
        assert!(progress.record_rows(1));
        assert_eq!(progress.level(), 3);
        assert_eq!(progress.threshold(), 30);
    }

    #[test]
    fn test_one_level_per_call() {
        let mut progress = LevelProgress::new();
        assert!(progress.record_rows(40));
        assert_eq!(progress.level(), 2);
    }

    #[test]
    fn test_level_capped() {
        let mut progress = LevelProgress::new();
        for _ in 0..200 {
            progress.record_rows(4);
        }
        assert_eq!(progress.level(), MAX_LEVEL);
        let rows = progress.rows_cleared();
        assert!(!progress.record_rows(4));
        assert_eq!(progress.rows_cleared(), rows);
    }
}
