use super::*;
use crate::{GameConfig, Side};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

#[test]
fn test_opening_moves_small_board() {
    let pos = Position::new_game(&GameConfig::new(4, 4, 1, Side::Second)).unwrap();
    let moves = legal_moves(&pos);
    // a4 has one diagonal, c4 has two; no captures yet
    assert_eq!(moves.len(), 3);
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn test_opening_moves_two_rows() {
    let pos = Position::new_game(&GameConfig::default()).unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 5);
    assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 2);
}

#[test]
fn test_capture_and_steps() {
    let pos = Position::from_diagram(
        "....
         .x..
         .o..
         ....",
        Side::Second,
    )
    .unwrap();
    let moves = moves_from(&pos, sq(2, 1));
    assert_eq!(moves.len(), 3);
    assert!(moves.contains(&Move::Simple {
        from: sq(2, 1),
        to: sq(1, 0)
    }));
    assert!(moves.contains(&Move::Simple {
        from: sq(2, 1),
        to: sq(1, 2)
    }));
    assert!(moves.contains(&Move::Capture {
        from: sq(2, 1),
        to: sq(0, 1),
        captured: sq(1, 1)
    }));
}

#[test]
fn test_capture_needs_empty_landing() {
    let pos = Position::from_diagram(
        ".x..
         .x..
         .o..
         ....",
        Side::Second,
    )
    .unwrap();
    let moves = moves_from(&pos, sq(2, 1));
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn test_capture_sideways_and_backwards() {
    // Jumps are orthogonal in all four directions, regardless of side
    let pos = Position::from_diagram(
        "....
         .o..
         ox..
         .o..",
        Side::First,
    )
    .unwrap();
    let captures: Vec<Move> = moves_from(&pos, sq(2, 1))
        .into_iter()
        .filter(|m| m.is_capture())
        .collect();
    // Up to b1 over b2; left is off the board after a3; down is off the board
    assert_eq!(
        captures,
        vec![Move::Capture {
            from: sq(2, 1),
            to: sq(0, 1),
            captured: sq(1, 1)
        }]
    );
}

#[test]
fn test_same_destination_kept_distinct() {
    let pos = Position::from_diagram(
        "....
         ..xo
         o.o.
         ....",
        Side::Second,
    )
    .unwrap();
    let into_b2: Vec<Move> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.to() == sq(1, 1))
        .collect();
    assert_eq!(into_b2.len(), 3);
    assert_eq!(into_b2.iter().filter(|m| m.is_capture()).count(), 1);
}

#[test]
fn test_moves_from_non_mover_squares_is_empty() {
    let pos = Position::new_game(&GameConfig::default()).unwrap();
    // First pawn while Second is to move
    assert!(moves_from(&pos, sq(1, 1)).is_empty());
    // Empty square
    assert!(moves_from(&pos, sq(1, 0)).is_empty());
    // Off the board
    assert!(moves_from(&pos, sq(7, 7)).is_empty());
}

#[test]
fn test_no_moves_on_last_row() {
    let pos = Position::from_diagram(
        "...o
         ....
         ....
         x...",
        Side::First,
    )
    .unwrap();
    assert!(legal_moves(&pos).is_empty());
    assert!(!has_legal_move(&pos));
}

#[test]
fn test_no_pawns_no_moves() {
    let pos = Position::from_diagram(
        "x...
         ....",
        Side::Second,
    )
    .unwrap();
    assert!(!has_legal_move(&pos));
}

#[test]
fn test_has_legal_move_matches_generator() {
    let pos = Position::new_game(&GameConfig::new(5, 5, 2, Side::First)).unwrap();
    assert_eq!(has_legal_move(&pos), !legal_moves(&pos).is_empty());
}
