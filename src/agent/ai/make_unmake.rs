// Speculative apply/undo on a shared board
//
// The live board is mutated in place, inspected, and restored before the next
// candidate is tried. In debug builds the restored board is compared against a
// snapshot taken before the action; a mismatch aborts the decision because
// every later sibling would be evaluated on a corrupted position.

use super::error::SearchError;
use crate::game_repr::{Action, GameBoard};

/// Apply `action`, run `inspect` on the resulting board, then undo it.
pub(crate) fn with_action<B, T, F>(board: &mut B, action: Action, inspect: F) -> Result<T, SearchError>
where
    B: GameBoard,
    F: FnOnce(&mut B) -> Result<T, SearchError>,
{
    let snapshot = cfg!(debug_assertions).then(|| board.clone());

    board.apply(action)?;
    let result = inspect(board);
    board.undo()?;

    if let Some(before) = snapshot {
        if *board != before {
            log::error!("undo of {} did not restore the board", action);
            return Err(SearchError::InvariantViolation(format!(
                "board differs after undoing {}",
                action
            )));
        }
    }

    result
}
