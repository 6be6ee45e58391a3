//! Game session: linear history with undo/redo and click-driven move input.

use crate::config::GameConfig;
use crate::error::{ConfigError, SessionError};
use crate::movegen::{has_legal_move, legal_moves, moves_from};
use crate::position::Position;
use crate::types::{Move, Side, Square};

/// What a click on the board did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A movable pawn was selected; these are its moves.
    Selected { square: Square, landing: Vec<Move> },
    /// The selected pawn was clicked again.
    Deselected,
    /// A landing square was clicked and its move played.
    Played(Move),
    /// The click had no effect.
    Ignored,
}

/// Owns the positions of one game, root first.
///
/// Every entry after the root was produced by applying a legal move to its
/// predecessor. Undone positions are kept on a redo stack until a new move
/// is played.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    history: Vec<Position>,
    redo: Vec<Position>,
    selected: Option<Square>,
    landing: Vec<Move>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let config = config.normalized();
        let root = Position::new_game(&config)?;
        Ok(Self::from_position(config, root))
    }

    /// Start a session from an arbitrary root position.
    pub fn from_position(config: GameConfig, root: Position) -> Self {
        Self {
            config,
            history: vec![root],
            redo: Vec::new(),
            selected: None,
            landing: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Drop everything but the root position.
    pub fn reset(&mut self) {
        self.history.truncate(1);
        self.redo.clear();
        self.deselect();
    }

    pub fn current(&self) -> &Position {
        // The root is never popped.
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Number of moves played since the root.
    pub fn ply(&self) -> usize {
        self.history.len() - 1
    }

    pub fn side_to_move(&self) -> Side {
        self.current().side_to_move()
    }

    /// Play a move after checking it against the legal moves of the current
    /// position.
    pub fn play(&mut self, mv: Move) -> Result<&Position, SessionError> {
        let current = *self.current();
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        if !legal_moves(&current).contains(&mv) {
            return Err(SessionError::IllegalMove {
                mv,
                side: current.side_to_move(),
            });
        }
        self.history.push(current.apply(mv));
        self.redo.clear();
        self.deselect();
        Ok(self.current())
    }

    /// Step back one move. Returns false at the root.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        if let Some(pos) = self.history.pop() {
            self.redo.push(pos);
        }
        self.deselect();
        true
    }

    /// Replay the last undone move. Returns false if there is none.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(pos) => {
                self.history.push(pos);
                self.deselect();
                true
            }
            None => false,
        }
    }

    /// The side to move has no legal move.
    pub fn is_over(&self) -> bool {
        !has_legal_move(self.current())
    }

    /// Winner of a finished game: the side that made the last move.
    pub fn result(&self) -> Option<Side> {
        self.is_over().then(|| self.side_to_move().other())
    }

    /// Side left without a move in a finished game.
    pub fn loser(&self) -> Option<Side> {
        self.result().map(Side::other)
    }

    /// Pawn counts as `(First, Second)`.
    pub fn pawn_counts(&self) -> (u32, u32) {
        let pos = self.current();
        (pos.pawn_count(Side::First), pos.pawn_count(Side::Second))
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Moves of the selected pawn.
    pub fn landing(&self) -> &[Move] {
        &self.landing
    }

    /// Handle a click on `sq`.
    ///
    /// Without a selection, clicking a pawn of the side to move that has at
    /// least one move selects it. With a selection, clicking the same square
    /// deselects and clicking one of its landing squares plays that move.
    /// Other clicks, and every click once the game is over, are ignored.
    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        if self.is_over() {
            return ClickOutcome::Ignored;
        }
        match self.selected {
            None => {
                let landing = moves_from(self.current(), sq);
                if landing.is_empty() {
                    return ClickOutcome::Ignored;
                }
                self.selected = Some(sq);
                self.landing = landing.clone();
                ClickOutcome::Selected {
                    square: sq,
                    landing,
                }
            }
            Some(selected) if selected == sq => {
                self.deselect();
                ClickOutcome::Deselected
            }
            Some(_) => match self.landing.iter().copied().find(|m| m.to() == sq) {
                Some(mv) => match self.play(mv) {
                    Ok(_) => ClickOutcome::Played(mv),
                    Err(_) => ClickOutcome::Ignored,
                },
                None => ClickOutcome::Ignored,
            },
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.landing.clear();
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
