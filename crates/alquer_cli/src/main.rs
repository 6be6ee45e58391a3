//! Play and solve Alquerkonane from the terminal.
//!
//! Solves the opening position, then reads commands from stdin (`help`
//! lists them). Logs go to stderr; set `RUST_LOG` or pass `-v` for more.

mod app;
mod command;
mod settings;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use alquer_core::{GameSession, Side};
use exhaustive_solver::ExhaustiveSolver;

use crate::app::{App, Flow};
use crate::settings::{Overrides, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "alquer",
    version,
    about = "Play Alquerkonane and solve positions exactly"
)]
struct Args {
    /// Board width (columns)
    #[arg(short = 'W', long)]
    width: Option<u8>,
    /// Board height (rows)
    #[arg(short = 'H', long)]
    height: Option<u8>,
    /// Rows of pawns per side (1 or 2)
    #[arg(short, long)]
    lines: Option<u8>,
    /// Side to move first: 0/first/black or 1/second/white
    #[arg(short, long, value_name = "SIDE")]
    start: Option<Side>,
    /// Print the perfect-play winner after every move
    #[arg(long)]
    win: bool,
    /// TOML settings file with [game] and [solver] tables
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Maximum number of memoized positions
    #[arg(long, value_name = "N")]
    memo_limit: Option<usize>,
    /// Log solver progress (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            height: self.height,
            lines: self.lines,
            start: self.start,
            memo_limit: self.memo_limit,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let file = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = file.resolve(&args.overrides())?;
    let game = settings.game;
    info!(
        width = game.width,
        height = game.height,
        lines = game.lines,
        start = %game.start,
        memo_limit = ?settings.solver.memo_limit,
        "starting game"
    );

    let session = GameSession::new(game).context("building the opening position")?;
    let solver = ExhaustiveSolver::with_config(&settings.solver);
    let mut app = App::new(session, solver, args.win);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", app.session().current())?;
    app.report_winner(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match command::parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(cmd)) => {
                if app.execute(cmd, &mut stdout)? == Flow::Quit {
                    break;
                }
            }
            Err(e) => {
                warn!(input = line.trim(), "rejected command");
                writeln!(stdout, "error: {e}")?;
            }
        }
        stdout.flush()?;
    }
    info!(ply = app.session().ply(), config = ?app.config(), "session closed");
    Ok(())
}
