//! Exhaustive Solver
//!
//! Exact win/loss evaluation of Alquerkonane positions by memoized AND-OR
//! search. The memo table is owned by the solver and reused across queries,
//! so asking again about a position (or one of its descendants) after a
//! solve is a table lookup.

mod memo;
mod search;

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use alquer_core::{Position, Side, SolveError, Solver};

pub use memo::MemoTable;
pub use search::SolveStats;

/// Solver settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum number of memoized positions (None = unbounded).
    pub memo_limit: Option<usize>,
}

/// Exact solver using memoized backward induction.
///
/// This solver uses:
/// - Depth-first AND-OR search, OR over the mover's moves
/// - One-ply short circuit when a move leaves the opponent without a reply
/// - A memo table keyed by position value, kept until `new_game`
/// - A recursion-path guard that reports cycles instead of looping
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver {
    memo: MemoTable,
    /// Counters from the most recent query
    stats: SolveStats,
}

impl ExhaustiveSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &SolverConfig) -> Self {
        Self {
            memo: MemoTable::new(config.memo_limit),
            stats: SolveStats::default(),
        }
    }

    /// Counters from the most recent `winner` call.
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    pub fn memo(&self) -> &MemoTable {
        &self.memo
    }

    /// Forget every memoized verdict.
    pub fn clear(&mut self) {
        self.memo.clear();
        self.stats = SolveStats::default();
    }
}

impl Solver for ExhaustiveSolver {
    fn winner(&mut self, pos: &Position) -> Result<Side, SolveError> {
        let start = Instant::now();
        debug!(
            side_to_move = %pos.side_to_move(),
            memo_entries = self.memo.len(),
            "solving position"
        );

        let mut search = search::Search::new(&mut self.memo);
        let result = search.winner(pos, 0);
        let mut stats = search.stats;
        stats.memo_entries = self.memo.len();
        self.stats = stats;

        match &result {
            Ok(winner) => debug!(
                %winner,
                expanded = stats.expanded,
                memo_hits = stats.memo_hits,
                short_circuits = stats.short_circuits,
                memo_entries = stats.memo_entries,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "solved position"
            ),
            Err(e) => warn!(error = %e, expanded = stats.expanded, "solve aborted"),
        }
        result
    }

    fn name(&self) -> &str {
        "exhaustive"
    }

    fn new_game(&mut self) {
        self.clear();
    }
}
