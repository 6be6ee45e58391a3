//! Board geometry: dimensions, bounds and cell indexing.

use crate::error::ConfigError;
use crate::types::Square;

/// Maximum number of cells a board may have (one bit per cell in a `u64`).
pub const MAX_CELLS: u32 = 64;

/// Columns are named `a` to `z`.
pub const MAX_WIDTH: u8 = 26;

/// Dimensions of a rectangular board, shared by every position of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
}

impl Board {
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }
        if width > MAX_WIDTH {
            return Err(ConfigError::TooWide(width));
        }
        let cells = width as u32 * height as u32;
        if cells > MAX_CELLS {
            return Err(ConfigError::TooManyCells {
                width,
                height,
                cells,
            });
        }
        Ok(Self { width, height })
    }

    #[inline(always)]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    pub fn cells(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// True iff `0 <= row < height` and `0 <= col < width`.
    #[inline(always)]
    pub fn inside(&self, row: i16, col: i16) -> bool {
        (0..self.height as i16).contains(&row) && (0..self.width as i16).contains(&col)
    }

    #[inline(always)]
    pub fn contains(&self, sq: Square) -> bool {
        sq.row < self.height && sq.col < self.width
    }

    /// Square reached from `sq` by `(dr, dc)`, if it is on the board.
    #[inline]
    pub fn step(&self, sq: Square, dr: i8, dc: i8) -> Option<Square> {
        let row = sq.row as i16 + dr as i16;
        let col = sq.col as i16 + dc as i16;
        if self.inside(row, col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Bit index of an on-board square.
    #[inline(always)]
    pub fn index(&self, sq: Square) -> u8 {
        debug_assert!(self.contains(sq), "{sq:?} off a {}x{} board", self.width, self.height);
        sq.row * self.width + sq.col
    }

    #[inline(always)]
    pub fn square(&self, idx: u8) -> Square {
        Square::new(idx / self.width, idx % self.width)
    }
}
