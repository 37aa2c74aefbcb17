//! Scoring module - score, cleared lines and level
//!
//! A lock event that clears `k` lines awards `k²` points, so multi-line clears are
//! worth disproportionately more. The level starts at 1 and goes up by one every
//! time the cumulative line count reaches a new multiple of ten.

use crate::types::{LINES_PER_LEVEL, START_LEVEL};

/// Outcome of recording one lock event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub score_gained: u32,
    /// Levels gained by this event (0 or 1 in practice).
    pub levels_gained: u32,
}

/// Points for clearing `lines` lines in one lock
pub fn calculate_line_score(lines: u32) -> u32 {
    lines.saturating_mul(lines)
}

/// Level reached after `total_lines` cumulative cleared lines
pub fn calculate_level(total_lines: u32) -> u32 {
    START_LEVEL + total_lines / LINES_PER_LEVEL
}

/// Cumulative game statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub level: u32,
    pub lines: u32,
    pub score: u32,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            level: START_LEVEL,
            lines: 0,
            score: 0,
        }
    }

    /// Account for a lock event that cleared `cleared` lines
    pub fn record_clear(&mut self, cleared: u32) -> ScoreResult {
        let score_gained = calculate_line_score(cleared);
        let before = calculate_level(self.lines);

        self.lines = self.lines.saturating_add(cleared);
        self.score = self.score.saturating_add(score_gained);

        let after = calculate_level(self.lines);
        let levels_gained = after - before;
        self.level += levels_gained;

        ScoreResult {
            score_gained,
            levels_gained,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
