use super::*;

const POSITIONS: [&str; 5] = [
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 b - - 0 10",
];

#[test]
fn test_startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0);
}

#[test]
fn test_mirror_negates() {
    for fen in POSITIONS {
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(evaluate(&pos.mirrored()), -evaluate(&pos), "{fen}");
    }
}

#[test]
fn test_side_to_move_flips_sign() {
    let white = Position::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
    let mut black = white;
    black.side_to_move = Color::Black;
    assert!(evaluate(&white) > 900);
    assert_eq!(evaluate(&black), -evaluate(&white));
}

#[test]
fn test_piece_square_bonus() {
    // A knight in the centre scores more than one on the rim
    let centre = Position::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").unwrap();
    let rim = Position::from_fen("4k3/8/8/8/N7/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(evaluate(&centre) - evaluate(&rim), 35);
}
