//! Immutable game positions.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, PositionError};
use crate::types::{Side, Square};

/// One snapshot of the game: pawn placement for both sides plus the side to
/// move.
///
/// Positions are values. Equality and hashing cover the board dimensions,
/// both pawn sets and the side to move, so positions reached through
/// different move orders compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    pawns: [Bitboard; 2],
    side_to_move: Side,
}

impl Position {
    /// Opening layout for `config`.
    ///
    /// Each side fills its `lines` rows nearest its own edge on alternating
    /// columns, shifted by one column on every other row. On boards with an
    /// odd height the `Second` side is shifted one column left so the two
    /// camps interlock instead of overlapping.
    pub fn new_game(config: &GameConfig) -> Result<Self, ConfigError> {
        let cfg = config.normalized();
        let board = cfg.board()?;
        let (width, height) = (board.width() as i16, board.height() as i16);

        let mut first = Bitboard::EMPTY;
        let mut second = Bitboard::EMPTY;
        for i in 0..cfg.lines as i16 {
            let shift = i % 2;
            for j in (0..width).step_by(2) {
                let col = j + shift;
                if col < width {
                    first.set(board.index(Square::new(i as u8, col as u8)));
                }
            }

            let row = height - i - 1;
            if height % 2 == 0 {
                for j in (0..width).step_by(2) {
                    let col = j + shift;
                    if col < width {
                        second.set(board.index(Square::new(row as u8, col as u8)));
                    }
                }
            } else {
                for j in (0..=width).step_by(2) {
                    let col = j + shift - 1;
                    if (0..width).contains(&col) {
                        second.set(board.index(Square::new(row as u8, col as u8)));
                    }
                }
            }
        }
        debug_assert!((first & second).is_empty(), "opening camps overlap");

        Ok(Self {
            board,
            pawns: [first, second],
            side_to_move: cfg.start,
        })
    }

    /// Build a position from explicit pawn lists.
    pub fn from_pawns(
        board: Board,
        first: &[Square],
        second: &[Square],
        side_to_move: Side,
    ) -> Result<Self, PositionError> {
        let mut pawns = [Bitboard::EMPTY; 2];
        for (side, squares) in [(Side::First, first), (Side::Second, second)] {
            for &sq in squares {
                if !board.contains(sq) {
                    return Err(PositionError::OutOfBounds {
                        square: sq,
                        width: board.width(),
                        height: board.height(),
                    });
                }
                pawns[side.idx()].set(board.index(sq));
            }
        }
        if let Some(idx) = (pawns[0] & pawns[1]).lsb() {
            return Err(PositionError::Overlap(board.square(idx)));
        }
        Ok(Self {
            board,
            pawns,
            side_to_move,
        })
    }

    /// Parse a text diagram: one line per row (row 0 first), `x` for a
    /// `First` pawn, `o` for a `Second` pawn, `.` for an empty cell.
    /// Whitespace inside a line and blank lines are ignored.
    pub fn from_diagram(diagram: &str, side_to_move: Side) -> Result<Self, PositionError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let board = Board::new(
            u8::try_from(width).unwrap_or(u8::MAX),
            u8::try_from(height).unwrap_or(u8::MAX),
        )?;

        let mut first = Vec::new();
        let mut second = Vec::new();
        for (r, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(PositionError::RowWidth {
                    row: r,
                    expected: width,
                    found: cells.len(),
                });
            }
            for (c, &ch) in cells.iter().enumerate() {
                let sq = Square::new(r as u8, c as u8);
                match ch {
                    'x' | 'X' => first.push(sq),
                    'o' | 'O' => second.push(sq),
                    '.' => {}
                    _ => return Err(PositionError::BadCell { row: r, ch }),
                }
            }
        }
        Self::from_pawns(board, &first, &second, side_to_move)
    }

    pub(crate) fn from_parts(board: Board, pawns: [Bitboard; 2], side_to_move: Side) -> Self {
        Self {
            board,
            pawns,
            side_to_move,
        }
    }

    #[inline(always)]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline(always)]
    pub fn pawns(&self, side: Side) -> Bitboard {
        self.pawns[side.idx()]
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.pawns[0] | self.pawns[1]
    }

    pub fn pawn_count(&self, side: Side) -> u32 {
        self.pawns(side).popcount()
    }

    /// Squares holding a pawn of `side`, in row-major order.
    pub fn pawn_squares(&self, side: Side) -> Vec<Square> {
        self.pawns(side).map(|idx| self.board.square(idx)).collect()
    }

    /// Owner of the pawn on `sq`, if any. Off-board squares are never owned.
    pub fn owner(&self, sq: Square) -> Option<Side> {
        if !self.board.contains(sq) {
            return None;
        }
        let idx = self.board.index(sq);
        Side::BOTH.into_iter().find(|s| self.pawns(*s).contains(idx))
    }

    /// True iff `(row, col)` is on the board and holds no pawn.
    #[inline]
    pub fn is_empty(&self, row: i16, col: i16) -> bool {
        self.board.inside(row, col)
            && !self
                .occupied()
                .contains(self.board.index(Square::new(row as u8, col as u8)))
    }

    #[inline]
    pub fn is_empty_square(&self, sq: Square) -> bool {
        self.is_empty(sq.row as i16, sq.col as i16)
    }

    /// Rows of `x`/`o`/`.` characters, row 0 first.
    pub fn diagram(&self) -> String {
        let mut out = String::with_capacity(self.board.cells() as usize + self.board.height() as usize);
        for row in 0..self.board.height() {
            for col in 0..self.board.width() {
                out.push(match self.owner(Square::new(row, col)) {
                    Some(Side::First) => 'x',
                    Some(Side::Second) => 'o',
                    None => '.',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.board.width() {
            write!(f, " {}", (b'a' + col) as char)?;
        }
        writeln!(f)?;
        for (row, line) in self.diagram().lines().enumerate() {
            write!(f, "{:>3}", row + 1)?;
            for ch in line.chars() {
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "{} to move ({} x {}, {} o {})",
            self.side_to_move,
            Side::First,
            self.pawn_count(Side::First),
            Side::Second,
            self.pawn_count(Side::Second)
        )
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
