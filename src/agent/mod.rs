pub mod player;
pub use player::*;

pub mod ai;
pub use ai::{choose_action, Difficulty, SearchConfig, SearchError, SearchPlayer, SearchResult, Searcher};
