//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p bchess_core -- [depth] [fen]
//!
//! Examples:
//!   # Default: depth 5 over the standard suite
//!   cargo flamegraph --example perft_bench -p bchess_core
//!
//!   # Custom depth and position (Kiwipete - complex middlegame)
//!   cargo flamegraph --example perft_bench -p bchess_core -- 4 "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -"

use std::env;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use bchess_core::{Position, attacks, perft, perft_divide};

const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Starting position", bchess_core::START_FEN),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Position 4",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -",
    ),
    (
        "Position 5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ -",
    ),
    (
        "Position 6",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
    ),
];

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);

    // Keep table construction out of the timings
    attacks::init();

    match args.get(2) {
        Some(fen) => match Position::from_fen(fen) {
            Ok(pos) => run_single_position(&pos, depth),
            Err(e) => {
                eprintln!("invalid FEN: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => run_all_positions(depth),
    }
    ExitCode::SUCCESS
}

fn run_single_position(pos: &Position, depth: u8) {
    println!("Position: {}", pos.to_fen());
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let divide = perft_divide(pos, depth);
    let elapsed = start.elapsed();

    let mut nodes = 0;
    for (mv, count) in &divide {
        println!("{mv}: {count}");
        nodes += count;
    }
    println!();
    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let Ok(pos) = Position::from_fen(fen) else {
            eprintln!("{name}: invalid FEN, skipped");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
