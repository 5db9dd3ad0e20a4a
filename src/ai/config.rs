//! Search configuration and difficulty presets
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 2
//! - **Medium**: Depth 4
//! - **Hard**: Depth 6
//! - **Expert**: Depth 8 with a 5s time limit

use std::time::Duration;

use super::search::{SearchLimits, MAX_LINES};
use super::transposition_table::DEFAULT_TT_SIZE;

/// Engine settings. Limits can be overridden per search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// `None` searches until `max_depth`
    pub time_budget: Option<Duration>,
    /// Number of ranked lines, clamped to 1..=10
    pub line_count: usize,
    /// Stop deepening once a mate is confirmed at this depth
    pub mate_exit_depth: u8,
    /// Transposition table slots
    pub tt_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            time_budget: None,
            line_count: 3,
            mate_exit_depth: 10,
            tt_size: DEFAULT_TT_SIZE,
        }
    }
}

impl SearchConfig {
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_time_budget(mut self, time_budget: Option<Duration>) -> Self {
        self.time_budget = time_budget;
        self
    }

    pub fn with_line_count(mut self, line_count: usize) -> Self {
        self.line_count = line_count.clamp(1, MAX_LINES);
        self
    }

    pub fn with_mate_exit_depth(mut self, depth: u8) -> Self {
        self.mate_exit_depth = depth;
        self
    }

    pub fn with_tt_size(mut self, tt_size: usize) -> Self {
        self.tt_size = tt_size.max(1);
        self
    }

    pub(crate) fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_depth: self.max_depth,
            time_budget: self.time_budget,
            line_count: self.line_count.clamp(1, MAX_LINES),
            mate_exit_depth: self.mate_exit_depth,
        }
    }
}

/// AI difficulty levels that map to search depth and time controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Depth 8, 5 second time limit
    Expert,
}

impl Difficulty {
    /// Maximum search depth in plies
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    /// Returns None for unlimited time, or Some(ms) for time-controlled search.
    pub fn time_limit_ms(&self) -> Option<u64> {
        match self {
            Difficulty::Expert => Some(5000),
            _ => None,
        }
    }

    pub fn config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_max_depth(self.max_depth())
            .with_time_budget(self.time_limit_ms().map(Duration::from_millis))
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!("unknown difficulty `{other}`")),
        }
    }
}
