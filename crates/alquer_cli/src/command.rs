//! Line commands read from stdin.

use alquer_core::{parse_square, Square};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the board.
    Show,
    /// List legal moves, optionally only those of one pawn.
    Moves(Option<Square>),
    /// Play a move given in text notation; checked against the position later.
    Play(String),
    Click(Square),
    Undo,
    Redo,
    Reset,
    Winner,
    Stats,
    Dump,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a square")]
    BadSquare(String),
    #[error("'{0}' takes no arguments")]
    UnexpectedArgument(&'static str),
    #[error("'{0}' takes one argument")]
    TooManyArguments(&'static str),
}

pub const HELP: &str = "\
commands:
  show              print the board
  moves [square]    list legal moves (of one pawn)
  play <move>       play a move, e.g. a1b2 or a1xa3
  click <square>    select a pawn, or a landing square of the selected pawn
  undo / redo       step through the move history
  reset             back to the opening position
  winner            solve the current position
  stats             counters from the last solve
  dump              current position as JSON
  help              this text
  quit              leave";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = parts.split_first() else {
        return Ok(None);
    };

    let no_args = |name: &'static str, cmd: Command| {
        if args.is_empty() {
            Ok(cmd)
        } else {
            Err(CommandError::UnexpectedArgument(name))
        }
    };

    let cmd = match head.to_ascii_lowercase().as_str() {
        "show" | "board" => no_args("show", Command::Show)?,
        "moves" => match args {
            [] => Command::Moves(None),
            [txt] => Command::Moves(Some(square_arg(txt)?)),
            _ => return Err(CommandError::TooManyArguments("moves")),
        },
        "play" | "move" => match args {
            [] => return Err(CommandError::MissingArgument("play")),
            [txt] => Command::Play(txt.to_string()),
            _ => return Err(CommandError::TooManyArguments("play")),
        },
        "click" => match args {
            [] => return Err(CommandError::MissingArgument("click")),
            [txt] => Command::Click(square_arg(txt)?),
            _ => return Err(CommandError::TooManyArguments("click")),
        },
        "undo" => no_args("undo", Command::Undo)?,
        "redo" => no_args("redo", Command::Redo)?,
        "reset" | "new" => no_args("reset", Command::Reset)?,
        "winner" | "solve" => no_args("winner", Command::Winner)?,
        "stats" => no_args("stats", Command::Stats)?,
        "dump" => no_args("dump", Command::Dump)?,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(cmd))
}

fn square_arg(txt: &str) -> Result<Square, CommandError> {
    parse_square(txt).ok_or_else(|| CommandError::BadSquare(txt.to_string()))
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
