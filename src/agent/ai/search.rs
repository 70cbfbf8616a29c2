// Root decision driver
//
// Ranks the mover's actions on the live board, then tries each one in place:
// apply, score (directly if it decides the game, otherwise by an alpha-beta
// search of the opponent's reply), undo. The first action with a strictly
// better value wins, so ties go to the earlier-ranked action. A candidate must
// beat the forced-loss sentinel to be chosen at all.

use super::alphabeta::{alpha_beta, decided_score, Role, SearchContext};
use super::config::SearchConfig;
use super::error::SearchError;
use super::evaluation::{Score, MAX_SCORE, MIN_SCORE};
use super::make_unmake::with_action;
use super::move_ordering::rank_and_prune;
use super::transposition_table::TranspositionTable;
use crate::game_repr::{Action, Color, GameBoard};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_action: Action,
    /// Value of `best_action` from the mover's perspective
    pub score: Score,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// Chooses actions for one side, one turn at a time.
///
/// Holds the search configuration and the randomness used to break ranking
/// ties. The board is borrowed per decision and handed back unchanged.
pub struct Searcher {
    config: SearchConfig,
    ctx: SearchContext,
}

impl Searcher {
    /// Searcher seeded from system entropy.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Searcher with a reproducible tie-break order.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SearchConfig, rng: StdRng) -> Self {
        let mut ctx = SearchContext::new(config.width(), rng);
        if config.use_transposition_table() {
            ctx = ctx.with_table(TranspositionTable::new());
        }
        Self { config, ctx }
    }

    /// The best action for `color` on `board`.
    ///
    /// `board` is mutated during the search and restored before returning.
    ///
    /// # Errors
    ///
    /// * [`SearchError::GameOver`] when the game on `board` has already ended
    /// * [`SearchError::NoLegalAction`] when `color` has no candidate action
    /// * [`SearchError::NoImprovingAction`] when every candidate is a forced loss
    /// * [`SearchError::InvariantViolation`] when undo fails to restore the board
    /// * [`SearchError::Board`] when the board rejects an action
    pub fn choose_action<B: GameBoard>(&mut self, board: &mut B, color: Color) -> Result<Action, SearchError> {
        self.search(board, color).map(|result| result.best_action)
    }

    /// Like [`Searcher::choose_action`], with the score and search statistics.
    pub fn search<B: GameBoard>(&mut self, board: &mut B, color: Color) -> Result<SearchResult, SearchError> {
        if board.game_over() {
            return Err(SearchError::GameOver);
        }

        let start_time = Instant::now();
        let depth = self.config.depth();
        let ctx = &mut self.ctx;
        ctx.nodes = 0;
        if let Some(table) = ctx.table.as_mut() {
            table.clear();
        }

        let candidates = rank_and_prune(board, color, ctx.width, &mut ctx.rng)?;
        let fallback = match candidates.first() {
            Some(&action) => action,
            None => return Err(SearchError::NoLegalAction { color }),
        };

        let mut best_action = None;
        let mut best_score = MIN_SCORE;

        for &action in &candidates {
            let score = with_action(board, action, |board| match decided_score(board, color) {
                Some(score) => Ok(score),
                None => alpha_beta(
                    board,
                    color.opposite(),
                    depth - 1,
                    MIN_SCORE,
                    MAX_SCORE,
                    Role::Min,
                    ctx,
                ),
            })?;

            trace!("candidate {} scored {}", action, score);

            if score > best_score {
                best_score = score;
                best_action = Some(action);
            }
        }

        let best_action = match best_action {
            Some(action) => action,
            None => {
                debug!("{} loses whatever it plays, best ranked was {}", color, fallback);
                return Err(SearchError::NoImprovingAction { color, fallback });
            }
        };
        let result = SearchResult {
            best_action,
            score: best_score,
            depth,
            nodes_searched: ctx.nodes,
            time_ms: start_time.elapsed().as_millis() as u64,
        };
        log_search_info(color, &result, ctx.table.as_ref());
        Ok(result)
    }
}

/// One-shot decision with a fresh searcher.
pub fn choose_action<B: GameBoard>(board: &mut B, color: Color, config: SearchConfig) -> Result<Action, SearchError> {
    Searcher::new(config).choose_action(board, color)
}

fn log_search_info(color: Color, result: &SearchResult, table: Option<&TranspositionTable>) {
    let nps = if result.time_ms > 0 {
        result.nodes_searched * 1000 / result.time_ms
    } else {
        result.nodes_searched
    };

    debug!(
        "{} depth {} score {} nodes {} time {}ms nps {} action {}",
        color, result.depth, result.score, result.nodes_searched, result.time_ms, nps, result.best_action
    );

    if let Some(table) = table {
        debug!(
            "table entries {} hit rate {:.1}%",
            table.size(),
            table.hit_rate() * 100.0
        );
    }
}
