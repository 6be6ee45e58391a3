//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p alquer_core -- [depth] [width] [height] [lines]
//!
//! Examples:
//!   # Default: depth 7 on every preset board
//!   cargo flamegraph --example perft_bench -p alquer_core
//!
//!   # Custom depth and board
//!   cargo flamegraph --example perft_bench -p alquer_core -- 8 6 6 2

use alquer_core::{perft, GameConfig, Position, Side};
use std::env;
use std::time::Instant;

/// Preset boards covering small, medium and the largest supported sizes
const PRESETS: &[(&str, GameConfig)] = &[
    ("4x4 one row", GameConfig { width: 4, height: 4, lines: 1, start: Side::Second }),
    ("4x4 two rows", GameConfig { width: 4, height: 4, lines: 2, start: Side::Second }),
    ("6x6 two rows", GameConfig { width: 6, height: 6, lines: 2, start: Side::Second }),
    ("8x8 two rows", GameConfig { width: 8, height: 8, lines: 2, start: Side::Second }),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(7);

    // If a board is given, use single board mode
    if args.len() >= 5 {
        let parse = |i: usize| args[i].parse::<u8>().ok();
        let (Some(width), Some(height), Some(lines)) = (parse(2), parse(3), parse(4)) else {
            eprintln!("width, height and lines must be small integers");
            std::process::exit(2);
        };
        run_single(
            "custom",
            &GameConfig::new(width, height, lines, Side::Second),
            depth,
        );
        return;
    }

    println!("Perft benchmark, depth {depth}");
    println!("{}", "=".repeat(60));

    let mut total_nodes = 0u64;
    let total_start = Instant::now();
    for (name, config) in PRESETS {
        total_nodes += run_single(name, config, depth);
    }
    let elapsed = total_start.elapsed();

    println!("{}", "=".repeat(60));
    println!(
        "Total: {} nodes in {:.3}s ({:.0} nodes/s)",
        total_nodes,
        elapsed.as_secs_f64(),
        total_nodes as f64 / elapsed.as_secs_f64().max(1e-9)
    );
}

fn run_single(name: &str, config: &GameConfig, depth: u8) -> u64 {
    let pos = match Position::new_game(config) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("{name}: {e}");
            return 0;
        }
    };
    let start = Instant::now();
    let nodes = perft(&pos, depth);
    let elapsed = start.elapsed();
    println!(
        "{:<16} depth {:>2}: {:>12} nodes in {:>8.3}s",
        name,
        depth,
        nodes,
        elapsed.as_secs_f64()
    );
    nodes
}
