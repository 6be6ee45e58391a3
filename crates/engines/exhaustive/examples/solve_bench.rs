//! Cold-solve benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example solve_bench -p exhaustive_solver -- [width height lines]
//!
//! Every board is solved from its opening with an empty memo table.

use alquer_core::{GameConfig, Position, Side, Solver};
use exhaustive_solver::ExhaustiveSolver;
use std::env;
use std::time::Instant;

const PRESETS: &[(&str, GameConfig)] = &[
    ("3x3 one row", GameConfig { width: 3, height: 3, lines: 1, start: Side::Second }),
    ("4x4 one row", GameConfig { width: 4, height: 4, lines: 1, start: Side::Second }),
    ("4x4 two rows", GameConfig { width: 4, height: 4, lines: 2, start: Side::Second }),
    ("5x5 one row", GameConfig { width: 5, height: 5, lines: 1, start: Side::Second }),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 4 {
        let parse = |i: usize| args[i].parse::<u8>().ok();
        let (Some(width), Some(height), Some(lines)) = (parse(1), parse(2), parse(3)) else {
            eprintln!("width, height and lines must be small integers");
            std::process::exit(2);
        };
        run_single(
            "custom",
            &GameConfig::new(width, height, lines, Side::Second),
        );
        return;
    }

    println!("Solve benchmark");
    println!("{}", "=".repeat(72));
    for (name, config) in PRESETS {
        run_single(name, config);
    }
}

fn run_single(name: &str, config: &GameConfig) {
    let pos = match Position::new_game(&config.normalized()) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("{name}: {e}");
            return;
        }
    };

    let mut solver = ExhaustiveSolver::new();
    let start = Instant::now();
    let result = solver.winner(&pos);
    let elapsed = start.elapsed();
    let stats = solver.stats();

    match result {
        Ok(winner) => println!(
            "{:<14} {:>6} wins  {:>10} expanded {:>10} memo {:>8.3}s",
            name,
            winner,
            stats.expanded,
            stats.memo_entries,
            elapsed.as_secs_f64()
        ),
        Err(e) => println!("{name:<14} aborted: {e}"),
    }
}
