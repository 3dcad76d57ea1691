//! Pre-computed attack tables for fast move generation and attack detection.
//!
//! This module contains:
//! - Knight and king attack tables
//! - Pawn capture tables, per color
//! - Magic-hashed bishop and rook tables (see [`crate::magic`])
//!
//! All of them live in one [`AttackTables`] value built on first use and
//! shared read-only for the rest of the process.

use std::sync::OnceLock;
use std::time::Instant;

use crate::bitboard::Bitboard;
use crate::magic::{build_slider_table, Slider, SliderTable};
use crate::types::Color;

/// Knight jumps with the file guard each shift needs.
const fn knight_mask(sq: u8) -> Bitboard {
    let bb = 1u64 << sq;
    let mut result = 0u64;

    // Two rows up (toward rank 8)
    result |= (bb >> 17) & Bitboard::NOT_FILE_H.0;
    result |= (bb >> 15) & Bitboard::NOT_FILE_A.0;
    // One row up
    result |= (bb >> 10) & Bitboard::NOT_FILE_GH.0;
    result |= (bb >> 6) & Bitboard::NOT_FILE_AB.0;
    // Two rows down
    result |= (bb << 17) & Bitboard::NOT_FILE_A.0;
    result |= (bb << 15) & Bitboard::NOT_FILE_H.0;
    // One row down
    result |= (bb << 10) & Bitboard::NOT_FILE_AB.0;
    result |= (bb << 6) & Bitboard::NOT_FILE_GH.0;

    Bitboard(result)
}

const fn king_mask(sq: u8) -> Bitboard {
    let bb = Bitboard::from_square(sq);
    Bitboard(
        bb.north().0
            | bb.south().0
            | bb.east().0
            | bb.west().0
            | bb.north_east().0
            | bb.north_west().0
            | bb.south_east().0
            | bb.south_west().0,
    )
}

/// Squares a pawn of `color` on `sq` captures on.
const fn pawn_mask(color: Color, sq: u8) -> Bitboard {
    let bb = Bitboard::from_square(sq);
    match color {
        Color::White => Bitboard(bb.north_east().0 | bb.north_west().0),
        Color::Black => Bitboard(bb.south_east().0 | bb.south_west().0),
    }
}

/// Every lookup table the move generator and attack queries need.
pub struct AttackTables {
    pub pawn: [[Bitboard; 64]; 2],
    pub knight: [Bitboard; 64],
    pub king: [Bitboard; 64],
    pub bishop: SliderTable,
    pub rook: SliderTable,
}

impl AttackTables {
    pub fn build() -> Self {
        let start = Instant::now();

        let mut pawn = [[Bitboard::EMPTY; 64]; 2];
        let mut knight = [Bitboard::EMPTY; 64];
        let mut king = [Bitboard::EMPTY; 64];
        for sq in 0..64u8 {
            pawn[Color::White.idx()][sq as usize] = pawn_mask(Color::White, sq);
            pawn[Color::Black.idx()][sq as usize] = pawn_mask(Color::Black, sq);
            knight[sq as usize] = knight_mask(sq);
            king[sq as usize] = king_mask(sq);
        }

        let bishop = build_slider_table(Slider::Bishop);
        let rook = build_slider_table(Slider::Rook);

        tracing::debug!(
            bishop_slots = bishop.attacks.len(),
            rook_slots = rook.attacks.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "attack tables built"
        );

        Self {
            pawn,
            knight,
            king,
            bishop,
            rook,
        }
    }

    /// Check every slider slot against direct ray casting.
    pub fn verify(&self) -> bool {
        self.bishop.verify(Slider::Bishop) && self.rook.verify(Slider::Rook)
    }
}

static TABLES: OnceLock<AttackTables> = OnceLock::new();

/// Process-wide tables, built on first call.
#[inline(always)]
pub fn tables() -> &'static AttackTables {
    TABLES.get_or_init(AttackTables::build)
}

/// Build the tables now rather than on the first query.
pub fn init() {
    tables();
}

/// Get pawn capture targets for a given color and square.
#[inline(always)]
pub fn pawn_attacks(sq: u8, color: Color) -> Bitboard {
    tables().pawn[color.idx()][sq as usize]
}

/// Get knight attacks for a given square.
#[inline(always)]
pub fn knight_attacks(sq: u8) -> Bitboard {
    tables().knight[sq as usize]
}

/// Get king attacks for a given square.
#[inline(always)]
pub fn king_attacks(sq: u8) -> Bitboard {
    tables().king[sq as usize]
}

/// Bishop attacks given a square and occupied squares.
#[inline(always)]
pub fn bishop_attacks(sq: u8, occupied: Bitboard) -> Bitboard {
    tables().bishop.lookup(sq, occupied)
}

/// Rook attacks given a square and occupied squares.
#[inline(always)]
pub fn rook_attacks(sq: u8, occupied: Bitboard) -> Bitboard {
    tables().rook.lookup(sq, occupied)
}

/// Queen attacks (union of bishop and rook attacks).
#[inline(always)]
pub fn queen_attacks(sq: u8, occupied: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}

/// Reference bishop attacks by ray casting; slow, for verification.
pub fn bishop_attacks_slow(sq: u8, occupied: Bitboard) -> Bitboard {
    crate::magic::sliding_attacks(Slider::Bishop, sq, occupied)
}

/// Reference rook attacks by ray casting; slow, for verification.
pub fn rook_attacks_slow(sq: u8, occupied: Bitboard) -> Bitboard {
    crate::magic::sliding_attacks(Slider::Rook, sq, occupied)
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
