//! Text notation for squares and moves.
//!
//! Squares are a column letter followed by a 1-based row number: `a1` is
//! row 0, column 0. Simple moves are written `a1b2`, captures `a1xa3`.

use crate::{movegen::legal_moves, position::Position, types::*};

pub fn square_name(sq: Square) -> String {
    format!("{}{}", (b'a' + sq.col) as char, sq.row as u16 + 1)
}

/// Parse a complete square name such as `c4`.
pub fn parse_square(txt: &str) -> Option<Square> {
    match split_square(txt.trim())? {
        (sq, "") => Some(sq),
        _ => None,
    }
}

pub fn move_to_text(mv: Move) -> String {
    match mv {
        Move::Simple { from, to } => format!("{}{}", square_name(from), square_name(to)),
        Move::Capture { from, to, .. } => format!("{}x{}", square_name(from), square_name(to)),
    }
}

/// Parse `txt` and match it against the legal moves of `pos`, so the result
/// is always playable there.
///
/// The separator between squares is optional (`a1a3`, `a1xa3` and `a1-a3`
/// are all accepted); the kind of move is taken from the legal move list.
pub fn parse_move(pos: &Position, txt: &str) -> Option<Move> {
    let (from, rest) = split_square(txt.trim())?;
    let to = parse_square(rest).or_else(|| parse_square(rest.strip_prefix(['x', '-', ':'])?))?;

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from() == from && m.to() == to)
}

/// Split a leading square off `txt`, returning it with the remaining text.
fn split_square(txt: &str) -> Option<(Square, &str)> {
    let mut chars = txt.char_indices();
    let (_, letter) = chars.next()?;
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let digits_end = chars
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(txt.len(), |(i, _)| i);
    let digits = &txt[1..digits_end];
    let row: u16 = digits.parse().ok()?;
    if row == 0 || row > u8::MAX as u16 {
        return None;
    }
    let sq = Square::new((row - 1) as u8, letter as u8 - b'a');
    Some((sq, &txt[digits_end..]))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
