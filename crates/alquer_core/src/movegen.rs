use crate::catalog::{steps, JUMPS};
use crate::position::Position;
use crate::types::{Move, Square};

/// Generate all legal moves, returning a freshly allocated vector.
///
/// No two entries are equal: a simple move and a capture never share both
/// origin and destination, and moves from different pawns differ by origin.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    legal_moves_into(pos, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    let board = pos.board();
    for idx in pos.pawns(pos.side_to_move()) {
        gen_pawn(pos, board.square(idx), out);
    }
}

/// Moves of the pawn on `sq`. Empty when `sq` is off the board, empty, or
/// holds an opposing pawn.
pub fn moves_from(pos: &Position, sq: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(6);
    moves_from_into(pos, sq, &mut out);
    out
}

pub fn moves_from_into(pos: &Position, sq: Square, out: &mut Vec<Move>) {
    out.clear();
    if pos.owner(sq) == Some(pos.side_to_move()) {
        gen_pawn(pos, sq, out);
    }
}

/// True if the side to move has at least one move. Stops at the first one.
pub fn has_legal_move(pos: &Position) -> bool {
    let board = pos.board();
    pos.pawns(pos.side_to_move())
        .any(|idx| pawn_can_move(pos, board.square(idx)))
}

fn gen_pawn(pos: &Position, from: Square, out: &mut Vec<Move>) {
    let mover = pos.side_to_move();

    for &(dr, dc) in steps(mover) {
        if let Some(to) = step_target(pos, from, dr, dc) {
            out.push(Move::Simple { from, to });
        }
    }

    for &(dr, dc) in &JUMPS {
        if let Some((to, captured)) = jump_target(pos, from, dr, dc) {
            out.push(Move::Capture { from, to, captured });
        }
    }
}

fn pawn_can_move(pos: &Position, from: Square) -> bool {
    steps(pos.side_to_move())
        .iter()
        .any(|&(dr, dc)| step_target(pos, from, dr, dc).is_some())
        || JUMPS
            .iter()
            .any(|&(dr, dc)| jump_target(pos, from, dr, dc).is_some())
}

#[inline]
fn step_target(pos: &Position, from: Square, dr: i8, dc: i8) -> Option<Square> {
    pos.board()
        .step(from, dr, dc)
        .filter(|&to| pos.is_empty_square(to))
}

/// Landing square and jumped square of a capture, if the landing square is
/// empty and the jumped square holds an opposing pawn.
#[inline]
fn jump_target(pos: &Position, from: Square, dr: i8, dc: i8) -> Option<(Square, Square)> {
    let board = pos.board();
    let to = board.step(from, dr, dc)?;
    if !pos.is_empty_square(to) {
        return None;
    }
    let mid = board.step(from, dr / 2, dc / 2)?;
    if pos.owner(mid) == Some(pos.side_to_move().other()) {
        Some((to, mid))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
