use super::{Color, HexPos};
use thiserror::Error;

/// Rejections raised by the board when an action or an undo cannot be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cannot spawn on occupied cell {0}")]
    CellOccupied(HexPos),
    #[error("cannot spawn: total power cap of {cap} reached")]
    PowerCapReached { cap: u32 },
    #[error("cannot spread from {cell}: not occupied by {color}")]
    NotOwned { cell: HexPos, color: Color },
    #[error("cell {0} is outside the board")]
    OutOfBounds(HexPos),
    #[error("action reported for {got} but {expected} is to move")]
    OutOfTurn { expected: Color, got: Color },
    #[error("the game is over, no further actions are accepted")]
    GameOver,
    #[error("no action to undo")]
    NothingToUndo,
    #[error("invalid board dimensions {height}x{width}")]
    InvalidDimensions { height: u8, width: u8 },
    #[error("malformed board notation: {0}")]
    Notation(String),
}
