use super::config::ConfigError;
use crate::game_repr::{Action, BoardError, Color};
use thiserror::Error;

/// Reasons a root decision can fail.
///
/// Wins, losses and ties are ordinary scores inside the search; only conditions
/// that make the decision itself meaningless surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("{color} has no action available")]
    NoLegalAction { color: Color },
    /// Every candidate scored as a forced loss. `fallback` is the best-ranked
    /// candidate, for callers that must move anyway.
    #[error("{color} has no action that avoids a forced loss")]
    NoImprovingAction { color: Color, fallback: Action },
    #[error("cannot decide on a finished game")]
    GameOver,
    #[error("board invariant violated: {0}")]
    InvariantViolation(String),
    #[error("invalid search configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("board rejected an operation: {0}")]
    Board(#[from] BoardError),
}
