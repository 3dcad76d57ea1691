//! Bitboard position state.
//!
//! A [`Position`] is twelve piece bitboards, three occupancy bitboards and
//! the scalar game state. It is `Copy`: the search takes a snapshot by value
//! before each move and restores it afterwards instead of undoing moves.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::types::*;

/// Index of the combined occupancy in [`Position::occupancy`].
pub const BOTH: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// One bitboard per piece, indexed by [`Piece::index`].
    pub pieces: [Bitboard; 12],
    /// White, black and combined occupancy; see [`Position::update_occupancy`].
    pub occupancy: [Bitboard; 3],
    pub side_to_move: Color,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub castling: CastlingRights,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl Position {
    /// Board with no pieces, White to move and no rights.
    pub fn empty() -> Self {
        Position {
            pieces: [Bitboard::EMPTY; 12],
            occupancy: [Bitboard::EMPTY; 3],
            side_to_move: Color::White,
            en_passant: None,
            castling: CastlingRights::empty(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = CastlingRights::all();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as u8;
            p.put_piece(Piece::new(Color::Black, kind), A8 + f);
            p.put_piece(Piece::new(Color::Black, PieceKind::Pawn), A8 + 8 + f);
            p.put_piece(Piece::new(Color::White, PieceKind::Pawn), A1 - 8 + f);
            p.put_piece(Piece::new(Color::White, kind), A1 + f);
        }
        p.update_occupancy();
        p
    }

    /// Add `piece` on `sq`. Occupancy is left stale until
    /// [`Position::update_occupancy`] runs.
    #[inline(always)]
    pub fn put_piece(&mut self, piece: Piece, sq: u8) {
        self.pieces[piece.index()].set(sq);
    }

    /// Bitboard of one piece.
    #[inline(always)]
    pub fn bitboard(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.occupancy[BOTH]
    }

    #[inline(always)]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.occupancy[color.idx()]
    }

    /// Recompute the three occupancy boards from the piece boards.
    pub fn update_occupancy(&mut self) {
        let mut white = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        for i in 0..6 {
            white |= self.pieces[i];
            black |= self.pieces[i + 6];
        }
        self.occupancy = [white, black, white | black];
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        if !self.occupied().contains(sq) {
            return None;
        }
        let range = if self.occupied_by(Color::White).contains(sq) {
            0..6
        } else {
            6..12
        };
        range
            .into_iter()
            .find(|&i| self.pieces[i].contains(sq))
            .and_then(Piece::from_index)
    }

    pub fn king_square(&self, color: Color) -> Option<u8> {
        self.bitboard(Piece::new(color, PieceKind::King)).lsb()
    }

    /// Whether any piece of `by` attacks `sq`.
    pub fn is_square_attacked(&self, sq: u8, by: Color) -> bool {
        let occ = self.occupied();
        let bb = |kind| self.bitboard(Piece::new(by, kind));
        let queens = bb(PieceKind::Queen);

        // A pawn of `by` hits sq exactly when a pawn of the other color on sq
        // would hit it back.
        !(pawn_attacks(sq, by.other()) & bb(PieceKind::Pawn)).is_empty()
            || !(knight_attacks(sq) & bb(PieceKind::Knight)).is_empty()
            || !(king_attacks(sq) & bb(PieceKind::King)).is_empty()
            || !(bishop_attacks(sq, occ) & (bb(PieceKind::Bishop) | queens)).is_empty()
            || !(rook_attacks(sq, occ) & (bb(PieceKind::Rook) | queens)).is_empty()
    }

    /// Whether `color`'s king is attacked. A side without a king is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(ksq) => self.is_square_attacked(ksq, color.other()),
            None => false,
        }
    }

    /// Colors swapped and board flipped top to bottom. Side to move and the
    /// clocks are kept, so the evaluation of the result is the negation of
    /// this position's.
    pub fn mirrored(&self) -> Position {
        let mut out = Position::empty();
        for piece in Piece::ALL {
            let flipped = Piece::new(piece.color.other(), piece.kind);
            out.pieces[flipped.index()] = self.pieces[piece.index()].flip_vertical();
        }
        out.update_occupancy();

        let c = self.castling;
        let mut castling = CastlingRights::empty();
        castling.set(CastlingRights::BK, c.contains(CastlingRights::WK));
        castling.set(CastlingRights::BQ, c.contains(CastlingRights::WQ));
        castling.set(CastlingRights::WK, c.contains(CastlingRights::BK));
        castling.set(CastlingRights::WQ, c.contains(CastlingRights::BQ));
        out.castling = castling;

        out.en_passant = self.en_passant.map(mirror_square);
        out.side_to_move = self.side_to_move;
        out.halfmove_clock = self.halfmove_clock;
        out.fullmove_number = self.fullmove_number;
        out
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
