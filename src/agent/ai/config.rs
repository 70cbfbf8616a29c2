//! Search configuration.
//!
//! Depth and pruning width are fixed when a searcher is built and validated
//! here, so the recursion itself never has to deal with nonsensical values.

use thiserror::Error;

pub const DEFAULT_DEPTH: u8 = 3;
pub const DEFAULT_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    ZeroDepth,
    #[error("pruning width must be at least 1")]
    ZeroWidth,
}

/// Parameters of one root decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    depth: u8,
    width: usize,
    use_transposition_table: bool,
}

impl SearchConfig {
    /// Build a configuration searching `depth` plies and keeping the `width`
    /// best-ranked actions at every node.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroDepth`] or [`ConfigError::ZeroWidth`] when either
    /// parameter is zero.
    pub fn new(depth: u8, width: usize) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(Self {
            depth,
            width,
            use_transposition_table: false,
        })
    }

    /// Enable or disable the transposition table for searches using this config.
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.use_transposition_table = enabled;
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn use_transposition_table(&self) -> bool {
        self.use_transposition_table
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            width: DEFAULT_WIDTH,
            use_transposition_table: false,
        }
    }
}

/// Preset strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Depth 1, top 10 actions
    Easy,
    /// Depth 3, top 15 actions
    #[default]
    Medium,
    /// Depth 5, top 20 actions
    Hard,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.max_depth(),
            width: self.width(),
            use_transposition_table: false,
        }
    }
}
