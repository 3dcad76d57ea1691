use super::*;

#[test]
fn test_startpos_shallow() {
    let pos = Position::startpos();
    assert_eq!(perft(&pos, 0), 1);
    assert_eq!(perft(&pos, 1), 20);
    assert_eq!(perft(&pos, 2), 400);
    assert_eq!(perft(&pos, 3), 8902);
}

#[test]
fn test_divide_sums_to_perft() {
    let pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
        .unwrap();
    let divide = perft_divide(&pos, 2);
    assert_eq!(divide.len(), 48);
    assert_eq!(divide.iter().map(|&(_, n)| n).sum::<u64>(), 2039);
    assert_eq!(perft(&pos, 2), 2039);
}

#[test]
fn test_divide_per_move() {
    let pos = Position::startpos();
    let divide = perft_divide(&pos, 3);
    let e2e4 = divide
        .iter()
        .find(|(mv, _)| mv.to_string() == "e2e4")
        .map(|&(_, n)| n);
    assert_eq!(e2e4, Some(600));
    assert!(perft_divide(&pos, 0).is_empty());
}
