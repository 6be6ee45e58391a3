//! Game setup parameters.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::ConfigError;
use crate::types::Side;

/// Board dimensions, number of pawn rows per side and the side that opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Rows of pawns per side, 1 or 2.
    pub lines: u8,
    pub start: Side,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 4,
            height: 4,
            lines: 2,
            start: Side::Second,
        }
    }
}

impl GameConfig {
    pub fn new(width: u8, height: u8, lines: u8, start: Side) -> Self {
        Self {
            width,
            height,
            lines,
            start,
        }
    }

    /// `lines` clamped into `[1, 2]`, and forced to 1 when the board has two
    /// rows or fewer.
    pub fn normalized(self) -> Self {
        let lines = if self.height <= 2 {
            1
        } else {
            self.lines.clamp(1, 2)
        };
        Self { lines, ..self }
    }

    pub fn board(&self) -> Result<Board, ConfigError> {
        Board::new(self.width, self.height)
    }

    /// Reject boards that are empty, wider than the column letters or larger
    /// than a bitboard.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board().map(|_| ())
    }
}
