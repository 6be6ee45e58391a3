pub mod bitboard;
pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod position;
pub mod session;
pub mod transition;
pub mod types;

// Re-export core game logic (not solver-specific)
pub use bitboard::*;
pub use board::*;
pub use config::GameConfig;
pub use error::*;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use position::Position;
pub use session::*;
pub use types::*;

// =============================================================================
// Solver trait — implemented by every way of deciding a position
// =============================================================================

/// Trait that all solvers must implement.
///
/// A solver decides which side wins a position under perfect play, using the
/// convention that a side with no legal move on its turn loses. Solvers may
/// cache results between queries; `new_game` drops whatever they hold.
pub trait Solver {
    /// The side that wins `pos` when both sides play perfectly.
    fn winner(&mut self, pos: &Position) -> Result<Side, SolveError>;

    /// Short name for logs and the command line.
    fn name(&self) -> &str;

    /// Reset internal state (memo tables, counters) for a new game.
    fn new_game(&mut self) {}
}
