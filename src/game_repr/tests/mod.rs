use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Parse a board, panicking on malformed notation
pub fn board(notation: &str) -> Board {
    Board::from_notation(notation).expect("valid notation")
}

/// Shorthand for a cell coordinate
pub fn pos(r: u8, q: u8) -> HexPos {
    HexPos::new(r, q)
}

/// Every action that is legal for the side to move
pub fn legal_actions(board: &Board) -> Vec<Action> {
    let mut actions = Vec::new();
    if board.is_game_over() {
        return actions;
    }
    for (cell, state) in board.cells() {
        if state.is(board.turn_color()) {
            for dir in HexDir::ALL {
                actions.push(Action::Spread(cell, dir));
            }
        } else if state.is_empty() && board.total_power() < MAX_TOTAL_POWER {
            actions.push(Action::Spawn(cell));
        }
    }
    actions
}

// ==================== TEST MODULES ====================

mod undo;
mod game_over;
