//! The narrow contract the search core needs from a game engine.
//!
//! The search never looks at rules: it enumerates cells, applies and undoes
//! actions, clones boards for speculative branches, and reads the derived
//! game-over status. Any engine that can do those things can be searched.

use super::{Action, BoardError, CellState, Color, HexPos};
use std::fmt::Debug;

pub trait GameBoard: Clone + PartialEq + Debug {
    /// Every cell with its contents, in a fixed enumeration order.
    fn cells(&self) -> impl Iterator<Item = (HexPos, CellState)> + '_;

    /// Apply `action` for the side to move, mutating the board in place.
    fn apply(&mut self, action: Action) -> Result<(), BoardError>;

    /// Revert the most recent `apply`, restoring the exact prior state.
    fn undo(&mut self) -> Result<(), BoardError>;

    fn game_over(&self) -> bool;

    /// The winning colour once the game is over, `None` while running or on a draw.
    fn winner(&self) -> Option<Color>;

    fn total_power(&self) -> u32 {
        self.cells().map(|(_, cell)| u32::from(cell.power)).sum()
    }

    fn color_power(&self, color: Color) -> u32 {
        self.cells()
            .filter(|(_, cell)| cell.is(color))
            .map(|(_, cell)| u32::from(cell.power))
            .sum()
    }
}
