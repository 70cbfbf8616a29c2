use super::*;

fn assert_undo_exact(b: &mut Board) {
    for action in legal_actions(b) {
        let before = b.clone();
        b.apply_action(action).unwrap();
        b.undo_action().unwrap();

        assert_eq!(*b, before, "undo of {} did not restore the board", action);
        assert_eq!(b.is_game_over(), before.is_game_over());
        assert_eq!(b.winner_color(), before.winner_color());
    }
}

#[test]
fn test_undo_restores_every_action() {
    let mut b = board("r2b1...../..r6..b3./......./b6.r1..../......./.....r4./....... r 12");
    assert_undo_exact(&mut b);
}

#[test]
fn test_undo_exact_over_reachable_boards() {
    // Walk two plies deep from a small position, checking undo at every node
    let mut b = board("r1.b1/.../r2.. r 3");
    for first in legal_actions(&b) {
        b.apply_action(first).unwrap();
        assert_undo_exact(&mut b);
        for second in legal_actions(&b) {
            b.apply_action(second).unwrap();
            assert_undo_exact(&mut b);
            b.undo_action().unwrap();
        }
        b.undo_action().unwrap();
    }
    assert_eq!(b, board("r1.b1/.../r2.. r 3"));
}

#[test]
fn test_undo_after_wrapping_spread() {
    let mut b = board("r6.. r 0");
    let before = b.clone();
    b.apply_action(Action::Spread(pos(0, 0), HexDir::UpLeft)).unwrap();
    b.undo_action().unwrap();
    assert_eq!(b, before);
}

#[test]
fn test_undo_without_history_fails() {
    let mut b = Board::new();
    assert_eq!(b.undo_action(), Err(BoardError::NothingToUndo));
}

#[test]
fn test_clone_is_independent() {
    let original = board("r1.b1/.../... r 2");
    let mut copy = original.clone();
    copy.apply_action(Action::Spawn(pos(1, 1))).unwrap();

    assert_eq!(original.get(pos(1, 1)), Some(CellState::EMPTY));
    assert_ne!(original, copy);
}
