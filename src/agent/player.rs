//! Player trait and associated types for game agents.
//!
//! A player is anything that can be asked for an action on its turn and that
//! is told about every action played, its own included. Each implementation
//! keeps whatever view of the game it needs; the trait only fixes the
//! turn-taking protocol.
//!
//! # Synchronous Design
//!
//! `get_action()` is blocking. A search player computes its action on the
//! calling thread and returns when the search completes.

use crate::agent::ai::SearchError;
use crate::game_repr::{Action, BoardError, Color};
use std::fmt;

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    RedWins,
    BlueWins,
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning colour, `None` meaning a draw
    pub fn from_winner(winner: Option<Color>) -> Self {
        match winner {
            Some(Color::Red) => GameResult::RedWins,
            Some(Color::Blue) => GameResult::BlueWins,
            None => GameResult::Draw,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::RedWins => Some(Color::Red),
            GameResult::BlueWins => Some(Color::Blue),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(color) => write!(f, "{} wins", color),
            None => write!(f, "draw"),
        }
    }
}

/// Trait for entities that can provide actions.
pub trait Player {
    /// The colour this player plays.
    fn color(&self) -> Color;

    /// Request the next action from this player.
    ///
    /// Called only when it is this player's turn.
    fn get_action(&mut self) -> Result<Action, SearchError>;

    /// Notify this player that `color` played `action`.
    ///
    /// Called after every action, including the player's own, in play order.
    fn turn(&mut self, color: Color, action: Action) -> Result<(), BoardError>;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
