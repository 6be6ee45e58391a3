use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two players.
///
/// `First` (black in the traditional setup) starts on row 0 and moves toward
/// increasing row indices; `Second` (white) starts on the last row and moves
/// toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::First => "First",
            Side::Second => "Second",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Side {
    type Err = String;

    /// Accepts `0`/`first`/`black` and `1`/`second`/`white`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "first" | "black" | "b" => Ok(Side::First),
            "1" | "second" | "white" | "w" => Ok(Side::Second),
            other => Err(format!("unknown side '{other}' (expected 0/first or 1/second)")),
        }
    }
}

/// A board coordinate. Row 0 is the edge where `Side::First` starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::notation::square_name(*self))
    }
}

/// A legal action, always derived from the position it was generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Move {
    /// One diagonal step forward onto an empty square.
    Simple { from: Square, to: Square },
    /// Two-square orthogonal jump over an opposing pawn, which is removed.
    Capture {
        from: Square,
        to: Square,
        captured: Square,
    },
}

impl Move {
    pub fn from(self) -> Square {
        match self {
            Move::Simple { from, .. } | Move::Capture { from, .. } => from,
        }
    }

    pub fn to(self) -> Square {
        match self {
            Move::Simple { to, .. } | Move::Capture { to, .. } => to,
        }
    }

    pub fn captured(self) -> Option<Square> {
        match self {
            Move::Simple { .. } => None,
            Move::Capture { captured, .. } => Some(captured),
        }
    }

    pub fn is_capture(self) -> bool {
        matches!(self, Move::Capture { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::notation::move_to_text(*self))
    }
}
