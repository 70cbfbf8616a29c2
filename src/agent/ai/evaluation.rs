// Position evaluation
// Scores are power differentials (positive = good for the evaluated colour)

use crate::game_repr::{Color, GameBoard};

pub type Score = i32;

/// Forced win as seen by the one-ply ranking heuristic.
pub const WIN_SCORE: Score = 1000;

/// Forced loss as seen by the one-ply ranking heuristic.
pub const LOSS_SCORE: Score = -WIN_SCORE;

/// Positive infinity: a decided win inside the search.
pub const MAX_SCORE: Score = i32::MAX;

/// Negative infinity: a decided loss inside the search. Symmetric with
/// `MAX_SCORE` so that negation never overflows.
pub const MIN_SCORE: Score = -MAX_SCORE;

/// Total power held by `color` and by everyone else.
fn power_split<B: GameBoard>(board: &B, color: Color) -> (Score, Score) {
    let mut own = 0;
    let mut other = 0;
    for (_, cell) in board.cells() {
        match cell.color {
            Some(c) if c == color => own += Score::from(cell.power),
            Some(_) => other += Score::from(cell.power),
            None => {}
        }
    }
    (own, other)
}

/// Power owned by `color` minus power owned by anyone else.
pub fn score_delta<B: GameBoard>(board: &B, color: Color) -> Score {
    let (own, other) = power_split(board, color);
    own - other
}

/// Heuristic used when ranking candidate actions one ply ahead.
///
/// A finished game where `color` holds no power is [`LOSS_SCORE`]; one where
/// the opponent holds none is [`WIN_SCORE`]. Otherwise the power delta.
pub fn score_terminal_aware<B: GameBoard>(board: &B, color: Color) -> Score {
    let (own, other) = power_split(board, color);
    if board.game_over() {
        if own == 0 {
            return LOSS_SCORE;
        }
        if other == 0 {
            return WIN_SCORE;
        }
    }
    own - other
}

/// Heuristic used at search leaves: decided games map to the infinities
/// according to the recorded winner, anything else to the power delta.
pub fn score_at_cutoff<B: GameBoard>(board: &B, color: Color) -> Score {
    match board.winner() {
        Some(winner) if winner == color.opposite() => MIN_SCORE,
        Some(_) => MAX_SCORE,
        None => score_delta(board, color),
    }
}
