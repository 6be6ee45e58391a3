use thiserror::Error;

use crate::types::{Move, Side, Square};

/// Invalid board or game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: u8, height: u8 },
    #[error("board {width}x{height} has {cells} cells, at most 64 are supported")]
    TooManyCells { width: u8, height: u8, cells: u32 },
    #[error("board width {0} exceeds the 26 lettered columns")]
    TooWide(u8),
}

/// A pawn layout that cannot form a position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("square {square} is outside the {width}x{height} board")]
    OutOfBounds { square: Square, width: u8, height: u8 },
    #[error("square {0} holds pawns of both sides")]
    Overlap(Square),
    #[error("diagram row {row} has {found} cells, expected {expected}")]
    RowWidth { row: usize, expected: usize, found: usize },
    #[error("unexpected character '{ch}' in diagram row {row}")]
    BadCell { row: usize, ch: char },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{mv} is not legal for {side} in the current position")]
    IllegalMove { mv: Move, side: Side },
    #[error("the game is over")]
    GameOver,
}

/// Reasons a solver query could not produce a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("position repeated on the search path at depth {depth}")]
    Cycle { depth: usize },
    #[error("memo table limit of {limit} positions exceeded")]
    MemoLimitExceeded { limit: usize },
}
