mod board;
mod error;
mod game_board;
mod hex;
mod moves;
mod piece;

#[cfg(test)]
mod tests;

pub use board::*;
pub use error::*;
pub use game_board::*;
pub use hex::*;
pub use moves::*;
pub use piece::*;
