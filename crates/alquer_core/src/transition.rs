//! Applying moves to positions.
//!
//! Both directions return a fresh [`Position`]; the receiver is never
//! modified, so earlier positions stay valid as history entries and memo keys.

use crate::bitboard::Bitboard;
use crate::position::Position;
use crate::types::Move;

impl Position {
    /// Play `mv` for the side to move.
    ///
    /// `mv` must come from [`legal_moves`](crate::legal_moves) or
    /// [`moves_from`](crate::moves_from) of this exact position. Nothing is
    /// validated here; callers that take moves from outside go through
    /// [`parse_move`](crate::parse_move) or a
    /// [`GameSession`](crate::GameSession).
    pub fn apply(&self, mv: Move) -> Position {
        let board = self.board();
        let mover = self.side_to_move();
        let opponent = mover.other();

        let mut pawns = [Bitboard::EMPTY; 2];
        pawns[mover.idx()] = self
            .pawns(mover)
            .moved(board.index(mv.from()), board.index(mv.to()));
        pawns[opponent.idx()] = self.pawns(opponent);
        if let Some(captured) = mv.captured() {
            pawns[opponent.idx()].clear(board.index(captured));
        }

        Position::from_parts(board, pawns, opponent)
    }

    /// Reconstruct the position `mv` was played from, given the position it
    /// produced. `self.unapply(mv)` is the inverse of `apply` for any legal `mv`.
    pub fn unapply(&self, mv: Move) -> Position {
        let board = self.board();
        let mover = self.side_to_move().other();
        let opponent = self.side_to_move();

        let mut pawns = [Bitboard::EMPTY; 2];
        pawns[mover.idx()] = self
            .pawns(mover)
            .moved(board.index(mv.to()), board.index(mv.from()));
        pawns[opponent.idx()] = self.pawns(opponent);
        if let Some(captured) = mv.captured() {
            pawns[opponent.idx()].set(board.index(captured));
        }

        Position::from_parts(board, pawns, mover)
    }
}
