// Alpha-Beta Search with explicit MAX/MIN roles
//
// Each node ranks and prunes the mover's candidate actions, then searches them
// in ranked order. Every child is searched on its own clone of the board, so
// siblings never share mutable state. A child whose action decides the game is
// scored directly from the recorded winner instead of being searched.
//
// Leaves (depth exhausted or game over) are scored from the perspective of the
// colour to move at that leaf.

use super::error::SearchError;
use super::evaluation::{score_at_cutoff, Score, MAX_SCORE, MIN_SCORE};
use super::move_ordering::rank_and_prune;
use super::transposition_table::{NodeType, TranspositionTable, TranspositionTableEntry};
use crate::game_repr::{Color, GameBoard};
use rand::rngs::StdRng;

/// Whether a node takes the maximum or the minimum of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Max,
    Min,
}

impl Role {
    pub fn flip(self) -> Self {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    /// The value a node of this role starts from before any child is seen.
    pub fn worst(self) -> Score {
        match self {
            Role::Max => MIN_SCORE,
            Role::Min => MAX_SCORE,
        }
    }
}

/// Mutable state shared by every node of one search.
pub struct SearchContext {
    /// Number of ranked actions searched at each node
    pub width: usize,
    /// Shuffles equal-scoring actions during ranking
    pub rng: StdRng,
    /// Optional cache of searched nodes
    pub table: Option<TranspositionTable>,
    /// Nodes visited so far
    pub nodes: u64,
}

impl SearchContext {
    pub fn new(width: usize, rng: StdRng) -> Self {
        Self {
            width,
            rng,
            table: None,
            nodes: 0,
        }
    }

    pub fn with_table(mut self, table: TranspositionTable) -> Self {
        self.table = Some(table);
        self
    }
}

/// Score of the position reached by one of `color`'s actions when that action
/// already decided the game, from `color`'s perspective.
pub(crate) fn decided_score<B: GameBoard>(board: &B, color: Color) -> Option<Score> {
    match board.winner() {
        Some(winner) if winner == color.opposite() => Some(MIN_SCORE),
        Some(_) => Some(MAX_SCORE),
        None => None,
    }
}

/// Alpha-beta search of `board` with `color` to move.
///
/// # Arguments
///
/// * `board` - Position owned by this node; ranking mutates and restores it
/// * `color` - Side to move
/// * `depth` - Remaining plies (0 = leaf)
/// * `alpha` - Best value a MAX ancestor is already guaranteed
/// * `beta` - Best value a MIN ancestor is already guaranteed
/// * `role` - Whether this node maximizes or minimizes
/// * `ctx` - Ranking randomness, node counter and optional table
///
/// # Returns
///
/// The node's value (fail-soft: may lie outside the window after a cutoff).
/// Errors only when the board rejects an action or fails to undo one.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta<B: GameBoard>(
    board: &mut B,
    color: Color,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    role: Role,
    ctx: &mut SearchContext,
) -> Result<Score, SearchError> {
    ctx.nodes += 1;

    if depth == 0 || board.game_over() {
        return Ok(score_at_cutoff(board, color));
    }

    let hash = ctx
        .table
        .as_ref()
        .map(|_| TranspositionTable::compute_hash(board, color, role));
    if let (Some(table), Some(hash)) = (ctx.table.as_mut(), hash) {
        if let Some(score) = table.lookup(hash, depth, alpha, beta) {
            return Ok(score);
        }
    }

    let actions = rank_and_prune(board, color, ctx.width, &mut ctx.rng)?;

    // Nothing to expand: treat the node as a leaf
    if actions.is_empty() {
        return Ok(score_at_cutoff(board, color));
    }

    let (alpha_orig, beta_orig) = (alpha, beta);
    let mut best = role.worst();

    for action in actions {
        let mut child = board.clone();
        child.apply(action)?;

        let value = match decided_score(&child, color) {
            Some(score) => score,
            None => alpha_beta(
                &mut child,
                color.opposite(),
                depth - 1,
                alpha,
                beta,
                role.flip(),
                ctx,
            )?,
        };

        match role {
            Role::Max => {
                best = best.max(value);
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
            Role::Min => {
                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
        }
    }

    if let (Some(table), Some(hash)) = (ctx.table.as_mut(), hash) {
        table.store(TranspositionTableEntry {
            hash,
            depth,
            score: best,
            node_type: NodeType::classify(best, alpha_orig, beta_orig),
        });
    }

    Ok(best)
}
