use super::{HexDir, HexPos};
use std::fmt;

/// A single turn: place a new token, or spread an owned token's power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Spawn(HexPos),
    Spread(HexPos, HexDir),
}

impl Action {
    pub fn is_spawn(&self) -> bool {
        matches!(self, Action::Spawn(_))
    }

    pub fn is_spread(&self) -> bool {
        matches!(self, Action::Spread(..))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Spawn(cell) => write!(f, "SPAWN({})", cell),
            Action::Spread(cell, dir) => write!(f, "SPREAD({}, {})", cell, dir),
        }
    }
}
