use super::alphabeta::decided_score;
use super::*;
use crate::game_repr::{Board, Color, GameBoard};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ==================== HELPER FUNCTIONS ====================

/// Parse a board, panicking on malformed notation
pub fn board(notation: &str) -> Board {
    Board::from_notation(notation).expect("valid notation")
}

/// Search context wide enough to keep every action on the small boards used here
pub fn full_width_ctx(seed: u64) -> SearchContext {
    SearchContext::new(usize::MAX, StdRng::seed_from_u64(seed))
}

/// Plain minimax over every generated action, with the same leaf and
/// decided-child conventions as the pruned search.
pub fn reference_minimax(board: &Board, color: Color, depth: u8, role: Role) -> Score {
    if depth == 0 || board.game_over() {
        return score_at_cutoff(board, color);
    }

    let actions = generate_actions(board, color);
    if actions.is_empty() {
        return score_at_cutoff(board, color);
    }

    let mut best = role.worst();
    for action in actions {
        let mut child = board.clone();
        child.apply(action).expect("generated action is legal");
        let value = decided_score(&child, color)
            .unwrap_or_else(|| reference_minimax(&child, color.opposite(), depth - 1, role.flip()));
        best = match role {
            Role::Max => best.max(value),
            Role::Min => best.min(value),
        };
    }
    best
}

/// Mid-game positions on 3x3 boards, Red and Blue to move
pub const POSITIONS: [&str; 4] = [
    "r2.b1/..b3/r1.. r 6",
    "r1.b2/b1r3./... b 5",
    "r6b5./.../b1.r2 r 9",
    "b2../r1.b1/r3.. b 7",
];

// ==================== TEST MODULES ====================

mod alphabeta_tests;
mod move_ordering_tests;
