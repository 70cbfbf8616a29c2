//! SearchPlayer - an agent that picks its actions with alpha-beta search
//!
//! The player keeps its own copy of the game: it starts from an empty board
//! and applies every action it is told about, so when asked for an action it
//! can search the live position directly.
//!
//! # Examples
//!
//! ```
//! use infexion_engine::agent::ai::{Difficulty, SearchPlayer};
//! use infexion_engine::agent::player::Player;
//! use infexion_engine::game_repr::Color;
//!
//! let mut red = SearchPlayer::with_difficulty(Color::Red, Difficulty::Easy);
//! let action = red.get_action().unwrap();
//! red.turn(Color::Red, action).unwrap();
//! ```

use super::config::{Difficulty, SearchConfig};
use super::error::SearchError;
use super::search::Searcher;
use crate::agent::player::{GameResult, Player};
use crate::game_repr::{Action, Board, BoardError, Color};
use log::{debug, info, warn};

pub struct SearchPlayer {
    color: Color,
    /// This player's view of the game, kept in sync through `turn`
    board: Board,
    searcher: Searcher,
    name: String,
}

impl SearchPlayer {
    /// Player on a fresh default board.
    pub fn new(color: Color, config: SearchConfig, name: String) -> Self {
        Self::with_board(color, Board::new(), Searcher::new(config), name)
    }

    /// Player with a preset strength; named after the difficulty.
    pub fn with_difficulty(color: Color, difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(color, difficulty.config(), name)
    }

    /// Player starting from an arbitrary board with a caller-built searcher.
    pub fn with_board(color: Color, board: Board, searcher: Searcher, name: String) -> Self {
        Self {
            color,
            board,
            searcher,
            name,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Player for SearchPlayer {
    fn color(&self) -> Color {
        self.color
    }

    /// A lost position still has to be played out: the best-ranked candidate
    /// is returned when no action avoids the loss.
    fn get_action(&mut self) -> Result<Action, SearchError> {
        match self.searcher.search(&mut self.board, self.color) {
            Ok(result) => {
                debug!(
                    "[{}] depth {}, {} nodes, score {}",
                    self.name, result.depth, result.nodes_searched, result.score
                );
                Ok(result.best_action)
            }
            Err(SearchError::NoImprovingAction { fallback, .. }) => {
                warn!("[{}] every action loses, playing {}", self.name, fallback);
                Ok(fallback)
            }
            Err(e) => Err(e),
        }
    }

    fn turn(&mut self, color: Color, action: Action) -> Result<(), BoardError> {
        let expected = self.board.turn_color();
        if color != expected {
            return Err(BoardError::OutOfTurn { expected, got: color });
        }
        self.board.apply_action(action)
    }

    fn game_ended(&mut self, result: GameResult) {
        info!("[{}] game over: {}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
