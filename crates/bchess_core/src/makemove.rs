//! Applying moves in place.
//!
//! There is no inverse move: callers copy the position before
//! [`Position::make_move`] and assign the copy back to undo. An illegal move
//! restores the pre-move state itself and reports `false`.

use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::moves::Move;
use crate::types::*;

/// Which moves [`Position::make_move`] accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveMode {
    AllMoves,
    /// Reject non-captures without touching the position (quiescence).
    OnlyCaptures,
}

/// Rights kept when a piece leaves or lands on each square. Moving the king
/// or a rook off its home square, or capturing on a rook's home square,
/// clears the matching bits.
const CASTLING_MASK: [u8; 64] = {
    let mut mask = [0b1111u8; 64];
    mask[A8 as usize] = 0b0111;
    mask[E8 as usize] = 0b0011;
    mask[H8 as usize] = 0b1011;
    mask[A1 as usize] = 0b1101;
    mask[E1 as usize] = 0b1100;
    mask[H1 as usize] = 0b1110;
    mask
};

/// Squares involved in one castling move.
pub(crate) struct CastlePath {
    pub color: Color,
    pub right: CastlingRights,
    pub king_from: u8,
    pub king_to: u8,
    pub rook_from: u8,
    pub rook_to: u8,
    /// Must be empty.
    pub between: Bitboard,
    /// Square the king crosses; must not be attacked.
    pub transit: u8,
}

pub(crate) const CASTLE_PATHS: [CastlePath; 4] = [
    CastlePath {
        color: Color::White,
        right: CastlingRights::WK,
        king_from: E1,
        king_to: G1,
        rook_from: H1,
        rook_to: F1,
        between: Bitboard::from_square(F1).with(G1),
        transit: F1,
    },
    CastlePath {
        color: Color::White,
        right: CastlingRights::WQ,
        king_from: E1,
        king_to: C1,
        rook_from: A1,
        rook_to: D1,
        between: Bitboard::from_square(D1).with(C1).with(B1),
        transit: D1,
    },
    CastlePath {
        color: Color::Black,
        right: CastlingRights::BK,
        king_from: E8,
        king_to: G8,
        rook_from: H8,
        rook_to: F8,
        between: Bitboard::from_square(F8).with(G8),
        transit: F8,
    },
    CastlePath {
        color: Color::Black,
        right: CastlingRights::BQ,
        king_from: E8,
        king_to: C8,
        rook_from: A8,
        rook_to: D8,
        between: Bitboard::from_square(D8).with(C8).with(B8),
        transit: D8,
    },
];

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline(always)]
fn en_passant_victim(mover: Color, to: u8) -> u8 {
    match mover {
        Color::White => to + 8,
        Color::Black => to - 8,
    }
}

impl Position {
    /// Play `mv` for the side to move.
    ///
    /// Returns `false` and leaves the position unchanged if the move would
    /// leave the mover's king attacked, or if `mode` is
    /// [`MoveMode::OnlyCaptures`] and the move is quiet.
    pub fn make_move(&mut self, mv: Move, mode: MoveMode) -> bool {
        if mode == MoveMode::OnlyCaptures && !mv.is_capture() {
            return false;
        }

        let saved = *self;
        let us = self.side_to_move;
        let them = us.other();
        let from = mv.from();
        let to = mv.to();
        let piece = mv.piece();

        self.pieces[piece.index()].clear(from);
        self.pieces[piece.index()].set(to);

        if mv.is_en_passant() {
            let victim = Piece::new(them, PieceKind::Pawn);
            self.pieces[victim.index()].clear(en_passant_victim(us, to));
        } else if mv.is_capture() {
            let first = them.idx() * 6;
            if let Some(bb) = self.pieces[first..first + 6]
                .iter_mut()
                .find(|bb| bb.contains(to))
            {
                bb.clear(to);
            }
        }

        if let Some(promo) = mv.promotion() {
            self.pieces[piece.index()].clear(to);
            self.pieces[promo.index()].set(to);
        }

        self.en_passant = if mv.is_double_push() {
            Some(en_passant_victim(us, to))
        } else {
            None
        };

        if mv.is_castling() {
            let Some(path) = CASTLE_PATHS
                .iter()
                .find(|p| p.color == us && p.king_from == from && p.king_to == to)
            else {
                *self = saved;
                return false;
            };
            let rook = Piece::new(us, PieceKind::Rook);
            self.pieces[rook.index()].clear(path.rook_from);
            self.pieces[rook.index()].set(path.rook_to);
        }

        let kept = CASTLING_MASK[from as usize] & CASTLING_MASK[to as usize];
        self.castling = CastlingRights::from_bits_truncate(self.castling.bits() & kept);

        if piece.kind == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        self.update_occupancy();
        self.side_to_move = them;

        if self.in_check(us) {
            *self = saved;
            return false;
        }
        true
    }
}

#[cfg(test)]
#[path = "makemove_tests.rs"]
mod makemove_tests;
