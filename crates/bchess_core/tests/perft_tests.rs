use std::time::Instant;

use rayon::prelude::*;

use bchess_core::{Position, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 5_000_000;

struct PerftCase {
    line: usize,
    fen: String,
    depths: Vec<(u8, u64)>,
}

/// `<fen> ;D1 20 ;D2 400 ...`
fn parse_epd_line(line: usize, text: &str) -> Option<PerftCase> {
    let mut parts = text.split(';');
    let fen = parts.next()?.trim();
    if fen.is_empty() || fen.starts_with('#') {
        return None;
    }

    let mut depths: Vec<(u8, u64)> = parts
        .filter_map(|part| {
            let mut items = part.split_whitespace();
            let depth = items.next()?.strip_prefix('D')?.parse().ok()?;
            let expected = items.next()?.parse().ok()?;
            Some((depth, expected))
        })
        .collect();
    if depths.is_empty() {
        return None;
    }
    depths.sort_by_key(|&(d, _)| d);
    Some(PerftCase {
        line,
        fen: fen.to_string(),
        depths,
    })
}

fn load_cases() -> Vec<PerftCase> {
    include_str!("standard.epd")
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_epd_line(idx + 1, line.trim()))
        .collect()
}

#[test]
fn epd_file_is_well_formed() {
    let cases = load_cases();
    assert_eq!(cases.len(), 7);
    for case in &cases {
        assert!(
            Position::from_fen(&case.fen).is_ok(),
            "line {}: bad FEN",
            case.line
        );
        assert_eq!(case.depths[0].0, 1);
    }
}

#[test]
fn perft_from_standard_epd() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let cases = load_cases();

    cases.par_iter().for_each(|case| {
        let pos = Position::from_fen(&case.fen).unwrap();
        let mut ran_depths = Vec::new();
        let mut total_nodes = 0u64;
        let start = Instant::now();

        for &(depth, expected) in &case.depths {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {depth} on line {} ({expected} nodes), set {FULL_PERFT_ENV}=1 to run all",
                    case.line
                );
                continue;
            }
            let got = perft(&pos, depth);
            assert_eq!(
                got, expected,
                "perft mismatch for '{}' at depth {depth}",
                case.fen
            );
            ran_depths.push(depth);
            total_nodes += got;
        }

        let elapsed = start.elapsed();
        println!(
            "line {:02}: depths {:?}, {} nodes in {:.3?} ({:.1} Mn/s)",
            case.line,
            ran_depths,
            total_nodes,
            elapsed,
            (total_nodes as f64 / 1_000_000.0) / elapsed.as_secs_f64().max(1e-9)
        );
    });
}
