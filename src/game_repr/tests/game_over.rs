use super::*;

#[test]
fn test_not_over_before_second_turn() {
    let mut b = Board::new();
    assert!(!b.is_game_over());
    b.apply_action(Action::Spawn(pos(0, 0))).unwrap();
    // Blue has no tokens yet but the game only starts being decided at turn 2
    assert!(!b.is_game_over());
    assert_eq!(b.winner_color(), None);
}

#[test]
fn test_over_when_a_colour_is_wiped_out() {
    let b = board("r2../.../... b 5");
    assert!(b.is_game_over());
    assert_eq!(b.winner_color(), Some(Color::Red));
}

#[test]
fn test_capture_ends_game() {
    let mut b = board("r1b1./.../... r 2");
    b.apply_action(Action::Spread(pos(0, 0), HexDir::DownRight)).unwrap();

    assert!(b.is_game_over());
    assert_eq!(b.winner_color(), Some(Color::Red));
}

#[test]
fn test_small_power_difference_is_draw() {
    // Turn limit reached with 3 vs 2 power: difference below WIN_POWER_DIFF
    let b = board("r3b2./.../... r 343");
    assert!(b.is_game_over());
    assert_eq!(b.winner_color(), None);
}

#[test]
fn test_turn_limit_decides_on_power() {
    let b = board("r3b1./.../... r 343");
    assert!(b.is_game_over());
    assert_eq!(b.winner_color(), Some(Color::Red));

    let running = board("r3b1./.../... r 342");
    assert!(!running.is_game_over());
    assert_eq!(running.winner_color(), None);
}

#[test]
fn test_both_wiped_out_is_draw() {
    let b = board(".../.../... r 4");
    assert!(b.is_game_over());
    assert_eq!(b.winner_color(), None);
}

#[test]
fn test_finished_game_rejects_actions() {
    let mut b = board("r1b1./.../... r 2");
    b.apply_action(Action::Spread(pos(0, 0), HexDir::DownRight)).unwrap();
    let after_capture = b.clone();

    assert_eq!(b.apply_action(Action::Spawn(pos(2, 2))), Err(BoardError::GameOver));
    assert_eq!(b, after_capture);

    // The capture itself can still be taken back
    b.undo_action().unwrap();
    assert!(!b.is_game_over());
}

#[test]
fn test_turn_counter_at_limit_of_notation() {
    let mut b = board("r3b1./.../... r 65535");
    assert!(b.is_game_over());
    assert_eq!(b.apply_action(Action::Spawn(pos(1, 1))), Err(BoardError::GameOver));
    assert_eq!(b.turn_count(), u16::MAX);
}
