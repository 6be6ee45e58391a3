//! Interactive game state: one session, one solver, text output.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use alquer_core::{
    legal_moves, moves_from, parse_move, ClickOutcome, GameConfig, GameSession, Move, Side,
    SolveError, Solver, Square,
};
use exhaustive_solver::ExhaustiveSolver;
use serde::Serialize;
use tracing::{debug, info};

use crate::command::{Command, HELP};

/// Whether the read loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// JSON view of the current position for `dump`.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub width: u8,
    pub height: u8,
    pub side_to_move: Side,
    pub ply: usize,
    pub first: Vec<Square>,
    pub second: Vec<Square>,
    pub legal_moves: Vec<Move>,
    pub result: Option<Side>,
}

impl Snapshot {
    pub fn of(session: &GameSession) -> Self {
        let pos = session.current();
        let board = pos.board();
        Self {
            width: board.width(),
            height: board.height(),
            side_to_move: pos.side_to_move(),
            ply: session.ply(),
            first: pos.pawn_squares(Side::First),
            second: pos.pawn_squares(Side::Second),
            legal_moves: legal_moves(pos),
            result: session.result(),
        }
    }
}

pub struct App {
    session: GameSession,
    solver: ExhaustiveSolver,
    /// Re-solve and print the winner after every change of position.
    show_winner: bool,
}

impl App {
    pub fn new(session: GameSession, solver: ExhaustiveSolver, show_winner: bool) -> Self {
        Self {
            session,
            solver,
            show_winner,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &GameConfig {
        self.session.config()
    }

    /// Solve the current position, timing the query.
    pub fn solve(&mut self) -> Result<(Side, Duration), SolveError> {
        let start = Instant::now();
        let winner = self.solver.winner(self.session.current())?;
        Ok((winner, start.elapsed()))
    }

    /// Print the winner of the current position and how long it took.
    pub fn report_winner(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.solve() {
            Ok((winner, elapsed)) => writeln!(
                out,
                "winner: {winner} (solved in {:.3} ms, {} positions known)",
                elapsed.as_secs_f64() * 1000.0,
                self.solver.memo().len()
            ),
            Err(e) => writeln!(out, "cannot solve: {e}"),
        }
    }

    pub fn execute(&mut self, cmd: Command, out: &mut impl Write) -> io::Result<Flow> {
        debug!(?cmd, ply = self.session.ply(), "command");
        match cmd {
            Command::Show => writeln!(out, "{}", self.session.current())?,
            Command::Moves(from) => {
                let pos = self.session.current();
                let moves = match from {
                    Some(sq) => moves_from(pos, sq),
                    None => legal_moves(pos),
                };
                writeln!(out, "{}", format_moves(&moves))?;
            }
            Command::Play(text) => {
                let pos = *self.session.current();
                match parse_move(&pos, &text) {
                    Some(mv) => match self.session.play(mv).map(|_| ()) {
                        Ok(()) => self.after_change(out)?,
                        Err(e) => writeln!(out, "error: {e}")?,
                    },
                    None => writeln!(out, "error: '{text}' is not a legal move here")?,
                }
            }
            Command::Click(sq) => match self.session.click(sq) {
                ClickOutcome::Selected { square, landing } => {
                    writeln!(out, "selected {square}: {}", format_moves(&landing))?
                }
                ClickOutcome::Deselected => writeln!(out, "deselected")?,
                ClickOutcome::Played(mv) => {
                    writeln!(out, "played {mv}")?;
                    self.after_change(out)?;
                }
                ClickOutcome::Ignored => writeln!(out, "nothing to do at {sq}")?,
            },
            Command::Undo => {
                if self.session.undo() {
                    self.after_change(out)?;
                } else {
                    writeln!(out, "nothing to undo")?;
                }
            }
            Command::Redo => {
                if self.session.redo() {
                    self.after_change(out)?;
                } else {
                    writeln!(out, "nothing to redo")?;
                }
            }
            Command::Reset => {
                self.session.reset();
                self.after_change(out)?;
            }
            Command::Winner => self.report_winner(out)?,
            Command::Stats => {
                let stats = self.solver.stats();
                writeln!(
                    out,
                    "solver {}: expanded {}, memo hits {}, short circuits {}, memo entries {}",
                    self.solver.name(),
                    stats.expanded,
                    stats.memo_hits,
                    stats.short_circuits,
                    stats.memo_entries
                )?;
            }
            Command::Dump => {
                let json = serde_json::to_string_pretty(&Snapshot::of(&self.session))
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn after_change(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.session.current())?;
        if let (Some(winner), Some(loser)) = (self.session.result(), self.session.loser()) {
            info!(%winner, ply = self.session.ply(), "game over");
            writeln!(out, "game over: {winner} wins, {loser} has no move")?;
        } else if self.show_winner {
            self.report_winner(out)?;
        }
        Ok(())
    }
}

fn format_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "no moves".to_string();
    }
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
