// AI Agent - Alpha-Beta search with explicit MAX/MIN roles
//
// The agent picks one action per turn for a given colour:
// - Candidate actions are ranked by a one-ply score and pruned to a fixed width
// - The root tries each candidate on the live board and undoes it afterwards
// - Inner nodes search each child on its own clone of the board
// - An optional transposition table caches searched nodes

mod alphabeta;
mod config;
mod error;
mod evaluation;
mod make_unmake;
mod move_ordering;
mod movegen;
mod search;
mod search_player;
mod transposition_table;

#[cfg(test)]
mod tests;

pub use alphabeta::{alpha_beta, Role, SearchContext};
pub use config::{ConfigError, Difficulty, SearchConfig, DEFAULT_DEPTH, DEFAULT_WIDTH};
pub use error::SearchError;
pub use evaluation::{score_at_cutoff, score_delta, score_terminal_aware, Score, LOSS_SCORE, MAX_SCORE, MIN_SCORE, WIN_SCORE};
pub use move_ordering::{rank_actions, rank_and_prune, ScoredAction};
pub use movegen::{generate_actions, ActionList};
pub use search::{choose_action, SearchResult, Searcher};
pub use search_player::SearchPlayer;
pub use transposition_table::{NodeType, TranspositionTable, TranspositionTableEntry};
