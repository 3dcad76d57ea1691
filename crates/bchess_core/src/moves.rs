//! Packed move representation.
//!
//! Layout of the `u32`:
//!
//! ```text
//! bits  0..6   source square
//! bits  6..12  target square
//! bits 12..16  moving piece index
//! bits 16..20  promotion piece index + 1 (0 = no promotion)
//! bit  20      capture
//! bit  21      double pawn push
//! bit  22      en passant
//! bit  23      castling
//! ```

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Piece, sq_to_coord};

const SQUARE_MASK: u32 = 0x3f;
const PIECE_MASK: u32 = 0xf;
const TARGET_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const PROMO_SHIFT: u32 = 16;
const CAPTURE: u32 = 1 << 20;
const DOUBLE_PUSH: u32 = 1 << 21;
const EN_PASSANT: u32 = 1 << 22;
const CASTLING: u32 = 1 << 23;

/// Upper bound on pseudo-legal moves in any reachable position.
pub const MAX_MOVES: usize = 256;

/// Move list stored inline, one per search node.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// Flags a generated move carries besides its squares and pieces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub capture: bool,
    pub double_push: bool,
    pub en_passant: bool,
    pub castling: bool,
}

impl MoveFlags {
    pub const QUIET: MoveFlags = MoveFlags {
        capture: false,
        double_push: false,
        en_passant: false,
        castling: false,
    };
    pub const CAPTURE: MoveFlags = MoveFlags {
        capture: true,
        ..MoveFlags::QUIET
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Move(u32);

impl Move {
    /// Placeholder for "no move"; never produced by the generator since
    /// source and target would coincide.
    pub const NONE: Move = Move(0);

    #[inline(always)]
    pub fn new(from: u8, to: u8, piece: Piece, promotion: Option<Piece>, flags: MoveFlags) -> Self {
        let promo = promotion.map_or(0, |p| p.index() as u32 + 1);
        let mut bits = (from as u32 & SQUARE_MASK)
            | ((to as u32 & SQUARE_MASK) << TARGET_SHIFT)
            | ((piece.index() as u32 & PIECE_MASK) << PIECE_SHIFT)
            | (promo << PROMO_SHIFT);
        if flags.capture {
            bits |= CAPTURE;
        }
        if flags.double_push {
            bits |= DOUBLE_PUSH;
        }
        if flags.en_passant {
            bits |= EN_PASSANT;
        }
        if flags.castling {
            bits |= CASTLING;
        }
        Move(bits)
    }

    #[inline(always)]
    pub fn from(self) -> u8 {
        (self.0 & SQUARE_MASK) as u8
    }

    #[inline(always)]
    pub fn to(self) -> u8 {
        ((self.0 >> TARGET_SHIFT) & SQUARE_MASK) as u8
    }

    /// Index of the moving piece, see [`Piece::index`].
    #[inline(always)]
    pub fn piece_index(self) -> usize {
        ((self.0 >> PIECE_SHIFT) & PIECE_MASK) as usize
    }

    #[inline(always)]
    pub fn piece(self) -> Piece {
        Piece::ALL[self.piece_index()]
    }

    #[inline(always)]
    pub fn promotion(self) -> Option<Piece> {
        match (self.0 >> PROMO_SHIFT) & PIECE_MASK {
            0 => None,
            p => Some(Piece::ALL[p as usize - 1]),
        }
    }

    #[inline(always)]
    pub fn is_capture(self) -> bool {
        self.0 & CAPTURE != 0
    }

    #[inline(always)]
    pub fn is_double_push(self) -> bool {
        self.0 & DOUBLE_PUSH != 0
    }

    #[inline(always)]
    pub fn is_en_passant(self) -> bool {
        self.0 & EN_PASSANT != 0
    }

    #[inline(always)]
    pub fn is_castling(self) -> bool {
        self.0 & CASTLING != 0
    }

    #[inline(always)]
    pub fn flags(self) -> MoveFlags {
        MoveFlags {
            capture: self.is_capture(),
            double_push: self.is_double_push(),
            en_passant: self.is_en_passant(),
            castling: self.is_castling(),
        }
    }

    /// Raw packed value.
    pub fn bits(self) -> u32 {
        self.0
    }
}

/// Long algebraic text as used by UCI: `e2e4`, `e7e8q`, `0000` for none.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Move::NONE {
            return f.write_str("0000");
        }
        write!(f, "{}{}", sq_to_coord(self.from()), sq_to_coord(self.to()))?;
        if let Some(p) = self.promotion() {
            write!(f, "{}", p.kind.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
