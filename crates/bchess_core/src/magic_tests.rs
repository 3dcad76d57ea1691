use super::*;
use crate::types::coord_to_sq;

fn s(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

#[test]
fn test_relevant_mask_sizes() {
    assert_eq!(relevant_mask(Slider::Rook, s("a1")).popcount(), 12);
    assert_eq!(relevant_mask(Slider::Rook, s("e4")).popcount(), 10);
    assert_eq!(relevant_mask(Slider::Rook, s("h8")).popcount(), 12);
    assert_eq!(relevant_mask(Slider::Bishop, s("e4")).popcount(), 9);
    assert_eq!(relevant_mask(Slider::Bishop, s("a8")).popcount(), 6);
    assert_eq!(relevant_mask(Slider::Bishop, s("d1")).popcount(), 5);
}

#[test]
fn test_relevant_mask_excludes_edges() {
    let mask = relevant_mask(Slider::Rook, s("d4"));
    assert!(!mask.contains(s("d1")));
    assert!(!mask.contains(s("d8")));
    assert!(!mask.contains(s("a4")));
    assert!(!mask.contains(s("h4")));
    assert!(mask.contains(s("d2")));
    assert!(mask.contains(s("g4")));
}

#[test]
fn test_set_occupancy_bounds() {
    let mask = relevant_mask(Slider::Bishop, s("c3"));
    let full = (1usize << mask.popcount()) - 1;
    assert_eq!(set_occupancy(0, mask), Bitboard::EMPTY);
    assert_eq!(set_occupancy(full, mask), mask);
    assert_eq!(set_occupancy(1, mask).popcount(), 1);
}

#[test]
fn test_sliding_attacks_stop_at_blocker() {
    // Rook on a1, blocker on a4
    let occupied = Bitboard::from_square(s("a4"));
    let attacks = sliding_attacks(Slider::Rook, s("a1"), occupied);
    assert!(attacks.contains(s("a2")));
    assert!(attacks.contains(s("a4"))); // blocker itself is attacked
    assert!(!attacks.contains(s("a5")));
    assert!(attacks.contains(s("h1")));
    assert_eq!(attacks.popcount(), 10);
}

#[test]
fn test_magic_index_stays_in_slice() {
    let table = build_slider_table(Slider::Bishop);
    for square in 0..64u8 {
        let magic = table.magics[square as usize];
        let size = 1usize << magic.mask.popcount();
        let idx = magic.index(Bitboard::ALL);
        assert!(idx >= magic.offset && idx < magic.offset + size);
    }
    assert_eq!(table.attacks.len(), 5248);
}
