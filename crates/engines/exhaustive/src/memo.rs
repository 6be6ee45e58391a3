//! Memo table of solved positions.

use std::collections::HashMap;

use alquer_core::{Position, Side, SolveError};

/// Solved positions and their winners.
///
/// Entries are never evicted; the table only grows until [`clear`](Self::clear).
/// An optional limit caps the number of entries.
#[derive(Debug, Clone, Default)]
pub struct MemoTable {
    entries: HashMap<Position, Side>,
    limit: Option<usize>,
}

impl MemoTable {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: HashMap::new(),
            limit,
        }
    }

    #[inline]
    pub fn get(&self, pos: &Position) -> Option<Side> {
        self.entries.get(pos).copied()
    }

    /// Record a verdict. Fails without inserting when the table is full.
    pub fn insert(&mut self, pos: Position, winner: Side) -> Result<(), SolveError> {
        if let Some(limit) = self.limit {
            if self.entries.len() >= limit && !self.entries.contains_key(&pos) {
                return Err(SolveError::MemoLimitExceeded { limit });
            }
        }
        self.entries.insert(pos, winner);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
