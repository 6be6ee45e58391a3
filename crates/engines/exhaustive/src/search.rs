//! Memoized AND-OR search over the game tree

use std::collections::HashSet;

use alquer_core::{has_legal_move, legal_moves, Position, Side, SolveError};

use crate::memo::MemoTable;

/// Counters for one solver query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Positions whose moves were enumerated by the search.
    pub expanded: u64,
    /// Lookups answered by the memo table.
    pub memo_hits: u64,
    /// Positions decided by a move that leaves the opponent without a reply.
    pub short_circuits: u64,
    /// Memo table size after the query.
    pub memo_entries: usize,
}

/// State shared by every node of one query.
pub struct Search<'a> {
    memo: &'a mut MemoTable,
    /// Positions on the current recursion path.
    on_path: HashSet<Position>,
    pub stats: SolveStats,
}

impl<'a> Search<'a> {
    pub fn new(memo: &'a mut MemoTable) -> Self {
        Self {
            memo,
            on_path: HashSet::new(),
            stats: SolveStats::default(),
        }
    }

    /// Winner of `pos` under perfect play; the side left without a move on
    /// its turn loses.
    ///
    /// Results are memoized by position value, so transpositions and repeated
    /// queries reuse earlier work. Re-entering a position that is still on
    /// the recursion path is reported as [`SolveError::Cycle`].
    pub fn winner(&mut self, pos: &Position, depth: usize) -> Result<Side, SolveError> {
        if let Some(winner) = self.memo.get(pos) {
            self.stats.memo_hits += 1;
            return Ok(winner);
        }
        if !self.on_path.insert(*pos) {
            return Err(SolveError::Cycle { depth });
        }

        let result = self.expand(pos, depth);
        self.on_path.remove(pos);

        let winner = result?;
        self.memo.insert(*pos, winner)?;
        Ok(winner)
    }

    fn expand(&mut self, pos: &Position, depth: usize) -> Result<Side, SolveError> {
        self.stats.expanded += 1;

        let mover = pos.side_to_move();
        let opponent = mover.other();

        let moves = legal_moves(pos);
        if moves.is_empty() {
            return Ok(opponent);
        }

        let mut successors = Vec::with_capacity(moves.len());
        for mv in moves {
            let next = pos.apply(mv);
            if !has_legal_move(&next) {
                // Opponent has no reply
                self.stats.short_circuits += 1;
                return Ok(mover);
            }
            successors.push(next);
        }

        // OR over our moves; each child already resolved the opponent's replies
        for next in &successors {
            if self.winner(next, depth + 1)? == mover {
                return Ok(mover);
            }
        }
        Ok(opponent)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
