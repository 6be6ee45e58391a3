use super::*;
use alquer_core::GameConfig;

fn opening(width: u8, height: u8, lines: u8, start: Side) -> Position {
    Position::new_game(&GameConfig::new(width, height, lines, start)).unwrap()
}

#[test]
fn test_stalemate_loses() {
    // First's only pawn sits on its last row
    let pos = Position::from_diagram("...o\n....\nx...", Side::First).unwrap();
    let mut memo = MemoTable::default();
    let mut search = Search::new(&mut memo);
    assert_eq!(search.winner(&pos, 0), Ok(Side::Second));
    assert_eq!(search.stats.expanded, 1);
}

#[test]
fn test_no_pawns_loses() {
    let pos = Position::from_diagram("x..\n...", Side::Second).unwrap();
    let mut memo = MemoTable::default();
    assert_eq!(Search::new(&mut memo).winner(&pos, 0), Ok(Side::First));
}

#[test]
fn test_single_move_to_stalemate_wins_immediately() {
    let pos = Position::from_diagram("x.o\n...", Side::First).unwrap();
    let mut memo = MemoTable::default();
    let mut search = Search::new(&mut memo);
    assert_eq!(search.winner(&pos, 0), Ok(Side::First));
    assert_eq!(search.stats.expanded, 1);
    assert_eq!(search.stats.short_circuits, 1);
}

#[test]
fn test_short_circuit_skips_siblings() {
    // Three moves; every sibling is generated but none is searched
    let pos = Position::from_diagram("x.ox\n....\n....", Side::First).unwrap();
    let mut memo = MemoTable::default();
    let mut search = Search::new(&mut memo);
    assert_eq!(search.winner(&pos, 0), Ok(Side::First));
    assert_eq!(search.stats.expanded, 1);
    assert_eq!(search.stats.memo_hits, 0);
}

#[test]
fn test_small_openings() {
    let cases = [
        (opening(4, 4, 1, Side::Second), Side::First),
        (opening(4, 4, 1, Side::First), Side::Second),
        (opening(3, 3, 1, Side::Second), Side::First),
        (opening(3, 3, 1, Side::First), Side::First),
        (opening(2, 2, 1, Side::Second), Side::First),
    ];
    for (pos, expected) in cases {
        let mut memo = MemoTable::default();
        assert_eq!(Search::new(&mut memo).winner(&pos, 0), Ok(expected), "{pos}");
    }
}

#[test]
fn test_memo_reused_across_queries() {
    let mut memo = MemoTable::default();
    let first = {
        let mut search = Search::new(&mut memo);
        let w = search.winner(&opening(4, 4, 1, Side::Second), 0);
        assert!(search.stats.expanded > 1);
        w
    };
    let entries = memo.len();

    // Independently constructed, equal value
    let mut search = Search::new(&mut memo);
    let second = search.winner(&opening(4, 4, 1, Side::Second), 0);
    assert_eq!(first, second);
    assert_eq!(search.stats.expanded, 0);
    assert_eq!(search.stats.memo_hits, 1);
    assert_eq!(memo.len(), entries);
}

#[test]
fn test_revisit_on_path_is_cycle() {
    let pos = opening(4, 4, 1, Side::Second);
    let mut memo = MemoTable::default();
    let mut search = Search::new(&mut memo);
    search.on_path.insert(pos);
    assert_eq!(search.winner(&pos, 3), Err(SolveError::Cycle { depth: 3 }));
}

#[test]
fn test_memo_limit_aborts_and_unwinds_path() {
    let mut memo = MemoTable::new(Some(1));
    let mut search = Search::new(&mut memo);
    assert_eq!(
        search.winner(&opening(4, 4, 2, Side::Second), 0),
        Err(SolveError::MemoLimitExceeded { limit: 1 })
    );
    assert!(search.on_path.is_empty());
    assert_eq!(memo.len(), 1);
}
