//! Magic-bitboard construction for bishops and rooks.
//!
//! For every square a slider's relevant occupancy mask (its empty-board rays
//! minus the board edge) is hashed with `(occupied & mask) * factor >> shift`
//! into a dense slice of a flat attack table. Factors are found at start-up
//! by a seeded random search; a candidate is accepted only when every subset
//! of the mask either lands in a free slot or in a slot that already holds
//! the identical attack set, so a table built here cannot hold a wrong entry.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::bitboard::Bitboard;
use crate::types::{file_of, rank_of, sq};

/// Fixed seed so every process builds the same tables.
const MAGIC_SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// Hashing parameters for one square of one slider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Magic {
    pub mask: Bitboard,
    pub factor: u64,
    pub shift: u32,
    pub offset: usize,
}

impl Magic {
    /// Slot of `occupied` in the flat attack table.
    #[inline(always)]
    pub fn index(&self, occupied: Bitboard) -> usize {
        let hash = (occupied.0 & self.mask.0).wrapping_mul(self.factor) >> self.shift;
        self.offset + hash as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    fn deltas(self) -> [(i8, i8); 4] {
        match self {
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
        }
    }
}

/// Ray-cast attacks from `square`. Each ray stops at, and includes, the
/// first occupied square.
pub fn sliding_attacks(slider: Slider, square: u8, occupied: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let f0 = file_of(square);
    let r0 = rank_of(square);
    for (df, dr) in slider.deltas() {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            attacks.set(to);
            if occupied.contains(to) {
                break;
            }
            f += df;
            r += dr;
        }
    }
    attacks
}

/// Squares whose occupancy can change the slider's attack set from `square`.
pub fn relevant_mask(slider: Slider, square: u8) -> Bitboard {
    let file = Bitboard(Bitboard::FILE_A.0 << (square % 8));
    let rank = Bitboard(Bitboard::RANK_8.0 << (8 * (square / 8)));
    let edges = ((Bitboard::RANK_1 | Bitboard::RANK_8) & !rank)
        | ((Bitboard::FILE_A | Bitboard::FILE_H) & !file);
    sliding_attacks(slider, square, Bitboard::EMPTY) & !edges
}

/// The `index`-th subset of `mask`: the k-th set bit of `mask` (counting
/// from the least significant end) is kept when bit k of `index` is set.
pub fn set_occupancy(index: usize, mask: Bitboard) -> Bitboard {
    let mut occupancy = Bitboard::EMPTY;
    for (k, square) in mask.enumerate() {
        if index & (1 << k) != 0 {
            occupancy.set(square);
        }
    }
    occupancy
}

/// Magic parameters and the flat attack table for one slider kind.
pub struct SliderTable {
    pub magics: [Magic; 64],
    pub attacks: Vec<Bitboard>,
}

impl SliderTable {
    #[inline(always)]
    pub fn lookup(&self, square: u8, occupied: Bitboard) -> Bitboard {
        self.attacks[self.magics[square as usize].index(occupied)]
    }

    /// Recheck every subset of every mask against ray casting.
    pub fn verify(&self, slider: Slider) -> bool {
        (0..64u8).all(|square| {
            let mask = self.magics[square as usize].mask;
            (0..1usize << mask.popcount()).all(|i| {
                let occupied = set_occupancy(i, mask);
                self.lookup(square, occupied) == sliding_attacks(slider, square, occupied)
            })
        })
    }
}

/// Build the magic table for `slider`, searching a factor for each square.
pub fn build_slider_table(slider: Slider) -> SliderTable {
    let mut rng = StdRng::seed_from_u64(MAGIC_SEED ^ slider as u64);
    let mut magics = [Magic::default(); 64];
    let mut attacks = Vec::new();

    for square in 0..64u8 {
        let mask = relevant_mask(slider, square);
        let bits = mask.popcount();
        let size = 1usize << bits;

        let occupancies: Vec<Bitboard> = (0..size).map(|i| set_occupancy(i, mask)).collect();
        let reference: Vec<Bitboard> = occupancies
            .iter()
            .map(|&occ| sliding_attacks(slider, square, occ))
            .collect();

        let factor = find_factor(&mut rng, mask, &occupancies, &reference);
        let magic = Magic {
            mask,
            factor,
            shift: 64 - bits,
            offset: attacks.len(),
        };

        attacks.resize(attacks.len() + size, Bitboard::EMPTY);
        for (occ, attack) in occupancies.iter().zip(&reference) {
            attacks[magic.index(*occ)] = *attack;
        }
        debug_assert!(
            occupancies
                .iter()
                .zip(&reference)
                .all(|(occ, attack)| attacks[magic.index(*occ)] == *attack),
            "magic collision on square {square}"
        );

        magics[square as usize] = magic;
    }

    SliderTable { magics, attacks }
}

fn find_factor(
    rng: &mut StdRng,
    mask: Bitboard,
    occupancies: &[Bitboard],
    reference: &[Bitboard],
) -> u64 {
    let bits = mask.popcount();
    let shift = 64 - bits;
    let size = 1usize << bits;

    // Slot contents are tagged with the attempt that wrote them, which avoids
    // clearing the scratch table between candidates.
    let mut used = vec![Bitboard::EMPTY; size];
    let mut epoch = vec![0u32; size];
    let mut attempt = 0u32;

    loop {
        // Sparse candidates hash far better than uniform ones.
        let factor = rng.next_u64() & rng.next_u64() & rng.next_u64();
        if (mask.0.wrapping_mul(factor) >> 56).count_ones() < 6 {
            continue;
        }
        attempt += 1;

        let fits = occupancies.iter().zip(reference).all(|(occ, attack)| {
            let idx = (occ.0.wrapping_mul(factor) >> shift) as usize;
            if epoch[idx] != attempt {
                epoch[idx] = attempt;
                used[idx] = *attack;
                true
            } else {
                used[idx] == *attack
            }
        });
        if fits {
            return factor;
        }
    }
}

#[cfg(test)]
#[path = "magic_tests.rs"]
mod magic_tests;
