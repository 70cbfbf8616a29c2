// Candidate action generation
//
// Only the shape of an action is considered here: spreads from every owned
// cell in every direction, then spawns on every empty cell while the board is
// below the power cap. Whether an action is legal is decided by the board
// when it is applied.

use crate::game_repr::{Action, Color, GameBoard, HexDir, MAX_TOTAL_POWER};
use smallvec::SmallVec;

pub type ActionList = SmallVec<[Action; 64]>;

/// All candidate actions for `color`: spreads first, then spawns, each in
/// cell enumeration order.
pub fn generate_actions<B: GameBoard>(board: &B, color: Color) -> ActionList {
    let mut actions = ActionList::new();
    let mut empty_cells: SmallVec<[_; 64]> = SmallVec::new();

    for (cell, state) in board.cells() {
        if state.is(color) {
            actions.extend(HexDir::ALL.iter().map(|&dir| Action::Spread(cell, dir)));
        } else if state.is_empty() {
            empty_cells.push(cell);
        }
    }

    if board.total_power() < MAX_TOTAL_POWER {
        actions.extend(empty_cells.into_iter().map(Action::Spawn));
    }

    actions
}
