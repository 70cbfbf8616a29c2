//! Self-play driver: two search agents play one game on the default board.
//!
//! Usage: `infexion [depth] [width]`. Set `RUST_LOG=debug` to see per-move
//! search statistics.

use infexion_engine::agent::ai::{SearchConfig, SearchError, SearchPlayer};
use infexion_engine::agent::player::{GameResult, Player};
use infexion_engine::game_repr::{Board, Color, GameBoard};
use log::{error, info};
use std::env;
use std::process::ExitCode;

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> Result<T, String> {
    match args.get(idx) {
        Some(raw) => raw.parse().map_err(|_| format!("invalid argument '{}'", raw)),
        None => Ok(default),
    }
}

fn config_from_args() -> Result<SearchConfig, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let defaults = SearchConfig::default();
    let depth = parse_arg(&args, 0, defaults.depth())?;
    let width = parse_arg(&args, 1, defaults.width())?;
    SearchConfig::new(depth, width).map_err(|e| e.to_string())
}

fn play(config: SearchConfig) -> Result<Board, SearchError> {
    let mut players = [
        SearchPlayer::new(Color::Red, config, "Red AI".to_string()),
        SearchPlayer::new(Color::Blue, config, "Blue AI".to_string()),
    ];
    let mut board = Board::new();

    while !board.game_over() {
        let color = board.turn_color();
        let mover = match color {
            Color::Red => &mut players[0],
            Color::Blue => &mut players[1],
        };
        let action = mover.get_action()?;
        info!("turn {}: {} plays {}", board.turn_count() + 1, color, action);

        board.apply(action)?;
        for player in players.iter_mut() {
            player.turn(color, action)?;
        }
    }

    let result = GameResult::from_winner(board.winner());
    for player in players.iter_mut() {
        player.game_ended(result);
    }
    Ok(board)
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match config_from_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("usage: infexion [depth] [width]: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "self-play at depth {} width {} (table {})",
        config.depth(),
        config.width(),
        config.use_transposition_table()
    );

    match play(config) {
        Ok(board) => {
            println!("{}", board);
            println!("{}", GameResult::from_winner(board.winner()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("game aborted: {}", e);
            eprintln!("game aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
