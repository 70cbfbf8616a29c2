// Move ordering with top-K truncation
//
// Every candidate is scored by looking one ply ahead from the mover's point of
// view, the list is shuffled so equal scores do not keep generation order, then
// stably sorted best-first and cut down to the requested width. This is what
// keeps a depth-3 search over hundreds of raw actions tractable.

use super::error::SearchError;
use super::evaluation::{score_terminal_aware, Score};
use super::make_unmake::with_action;
use super::movegen::{generate_actions, ActionList};
use crate::game_repr::{Action, Color, GameBoard};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Score for move ordering (higher = better for the mover)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredAction {
    pub action: Action,
    pub score: Score,
}

/// Score every candidate action for `color`, shuffle, and sort best-first.
///
/// The board is mutated and restored for each candidate.
pub fn rank_actions<B, R>(
    board: &mut B,
    color: Color,
    rng: &mut R,
) -> Result<SmallVec<[ScoredAction; 64]>, SearchError>
where
    B: GameBoard,
    R: Rng + ?Sized,
{
    let actions = generate_actions(board, color);

    let mut scored: SmallVec<[ScoredAction; 64]> = SmallVec::with_capacity(actions.len());
    for action in actions {
        let score = with_action(board, action, |b| Ok(score_terminal_aware(b, color)))?;
        scored.push(ScoredAction { action, score });
    }

    scored.shuffle(rng);
    // Stable sort: ties keep their shuffled order
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    Ok(scored)
}

/// The `width` best candidate actions for `color`, best first.
///
/// Scores are always taken from the mover's perspective, whatever role the
/// surrounding search node plays.
pub fn rank_and_prune<B, R>(
    board: &mut B,
    color: Color,
    width: usize,
    rng: &mut R,
) -> Result<ActionList, SearchError>
where
    B: GameBoard,
    R: Rng + ?Sized,
{
    let scored = rank_actions(board, color, rng)?;
    Ok(scored.into_iter().take(width).map(|s| s.action).collect())
}
