//! Move text in the UCI long algebraic form, and `position` argument decoding.

use crate::board::Position;
use crate::error::ParseError;
use crate::makemove::MoveMode;
use crate::movegen::generate_moves;
use crate::moves::{Move, MoveList};
use crate::types::*;

/// Match `e2e4` / `e7e8q` style text against the generated moves, so the
/// returned move carries the right piece and flags. The move may still be
/// illegal; make decides that.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        None => None,
        Some(c) => {
            let kind = PieceKind::from_char(c)?;
            if !PieceKind::PROMOTIONS.contains(&kind) {
                return None;
            }
            Some(kind)
        }
    };

    let mut moves = MoveList::new();
    generate_moves(pos, &mut moves);
    moves
        .into_iter()
        .find(|m| m.from() == from && m.to() == to && m.promotion().map(|p| p.kind) == promo)
}

/// Build a position from the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
pub fn set_position_from_uci(args: &[&str]) -> Result<Position, ParseError> {
    let moves_at = args
        .iter()
        .position(|&a| a == "moves")
        .unwrap_or(args.len());

    let mut pos = match args.first() {
        Some(&"startpos") => Position::startpos(),
        Some(&"fen") => Position::from_fen(&args[1..moves_at].join(" "))?,
        Some(other) => return Err(ParseError::PositionSource(other.to_string())),
        None => return Err(ParseError::PositionSource(String::new())),
    };

    for &text in args.iter().skip(moves_at + 1) {
        let mv = parse_uci_move(&pos, text)
            .ok_or_else(|| ParseError::UnknownMove(text.to_string()))?;
        if !pos.make_move(mv, MoveMode::AllMoves) {
            return Err(ParseError::IllegalMove(text.to_string()));
        }
    }
    Ok(pos)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
