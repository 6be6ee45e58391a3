use super::*;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn b3_capture() -> Move {
    Move::Capture {
        from: sq(2, 1),
        to: sq(0, 1),
        captured: sq(1, 1),
    }
}

#[test]
fn test_new_session_starts_at_root() {
    let session = GameSession::new(GameConfig::default()).unwrap();
    assert_eq!(session.ply(), 0);
    assert_eq!(session.side_to_move(), Side::Second);
    assert_eq!(session.pawn_counts(), (4, 4));
    assert!(!session.is_over());
    assert_eq!(session.result(), None);
}

#[test]
fn test_undo_at_root_is_noop() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    let root = *session.current();
    assert!(!session.undo());
    assert_eq!(*session.current(), root);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_play_and_undo_restore_exact_position() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    let root = *session.current();

    let after = *session.play(b3_capture()).unwrap();
    assert_eq!(after.side_to_move(), Side::First);
    assert_eq!(session.pawn_counts(), (3, 4));
    assert_eq!(session.ply(), 1);

    assert!(session.undo());
    assert_eq!(*session.current(), root);

    assert!(session.redo());
    assert_eq!(*session.current(), after);
    assert!(!session.redo());
}

#[test]
fn test_illegal_move_rejected() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    let bogus = Move::Simple {
        from: sq(3, 0),
        to: sq(2, 1),
    };
    assert_eq!(
        session.play(bogus),
        Err(SessionError::IllegalMove {
            mv: bogus,
            side: Side::Second
        })
    );
    assert_eq!(session.ply(), 0);
}

#[test]
fn test_new_move_clears_redo() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    session.play(b3_capture()).unwrap();
    assert!(session.undo());
    session
        .play(Move::Simple {
            from: sq(2, 1),
            to: sq(1, 0),
        })
        .unwrap();
    assert!(!session.redo());
}

#[test]
fn test_reset_returns_to_root() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    let root = *session.current();
    session.play(b3_capture()).unwrap();
    session.reset();
    assert_eq!(*session.current(), root);
    assert_eq!(session.ply(), 0);
    assert!(!session.redo());
}

#[test]
fn test_click_select_deselect_play() {
    let mut session = GameSession::new(GameConfig::default()).unwrap();

    // a4 is blocked
    assert_eq!(session.click(sq(3, 0)), ClickOutcome::Ignored);
    // Opposing pawn
    assert_eq!(session.click(sq(1, 1)), ClickOutcome::Ignored);

    match session.click(sq(2, 1)) {
        ClickOutcome::Selected { square, landing } => {
            assert_eq!(square, sq(2, 1));
            assert_eq!(landing.len(), 3);
        }
        other => panic!("expected selection, got {other:?}"),
    }
    assert_eq!(session.selected(), Some(sq(2, 1)));

    assert_eq!(session.click(sq(2, 1)), ClickOutcome::Deselected);
    assert_eq!(session.selected(), None);
    assert!(session.landing().is_empty());

    session.click(sq(2, 1));
    // Not a landing square
    assert_eq!(session.click(sq(2, 2)), ClickOutcome::Ignored);
    assert_eq!(session.click(sq(0, 1)), ClickOutcome::Played(b3_capture()));
    assert_eq!(session.selected(), None);
    assert_eq!(session.side_to_move(), Side::First);
}

#[test]
fn test_finished_game() {
    // 2x2 board: Second steps up, First steps down, Second is stuck
    let mut session = GameSession::new(GameConfig::new(2, 2, 1, Side::Second)).unwrap();
    session
        .play(Move::Simple {
            from: sq(1, 0),
            to: sq(0, 1),
        })
        .unwrap();
    session
        .play(Move::Simple {
            from: sq(0, 0),
            to: sq(1, 1),
        })
        .unwrap();

    assert!(session.is_over());
    assert_eq!(session.result(), Some(Side::First));
    assert_eq!(session.loser(), Some(Side::Second));
    assert_eq!(session.click(sq(0, 1)), ClickOutcome::Ignored);

    let any = Move::Simple {
        from: sq(0, 1),
        to: sq(1, 0),
    };
    assert_eq!(session.play(any), Err(SessionError::GameOver));

    // Undo still works from a finished game
    assert!(session.undo());
    assert!(!session.is_over());
    assert_eq!(session.loser(), None);
}
