use crate::board::Position;
use crate::makemove::MoveMode;
use crate::movegen::generate_moves;
use crate::moves::{Move, MoveList};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    let mut pos = *pos;
    inner(&mut pos, depth)
}

fn inner(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveList::new();
    generate_moves(pos, &mut moves);

    let mut nodes = 0u64;
    for mv in moves {
        let saved = *pos;
        if !pos.make_move(mv, MoveMode::AllMoves) {
            continue;
        }
        nodes += if depth == 1 { 1 } else { inner(pos, depth - 1) };
        *pos = saved;
    }
    nodes
}

/// Node count below each legal root move, in generation order.
pub fn perft_divide(pos: &Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut moves = MoveList::new();
    generate_moves(pos, &mut moves);

    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        let mut child = *pos;
        if child.make_move(mv, MoveMode::AllMoves) {
            out.push((mv, inner(&mut child, depth - 1)));
        }
    }
    out
}

#[cfg(test)]
#[path = "perft_tests.rs"]
mod perft_tests;
