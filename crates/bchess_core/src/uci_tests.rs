use super::*;

#[test]
fn test_parse_carries_flags() {
    let pos = Position::startpos();
    let mv = parse_uci_move(&pos, "e2e4").unwrap();
    assert!(mv.is_double_push());
    assert_eq!(mv.piece(), Piece::new(Color::White, PieceKind::Pawn));
    assert_eq!(mv.to_string(), "e2e4");

    let castle = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert!(parse_uci_move(&castle, "e1c1").unwrap().is_castling());
}

#[test]
fn test_parse_promotion() {
    let pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "a7a8r").unwrap();
    assert_eq!(mv.promotion(), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(mv.to_string(), "a7a8r");
    // A promotion needs its letter
    assert_eq!(parse_uci_move(&pos, "a7a8"), None);
    assert_eq!(parse_uci_move(&pos, "a7a8k"), None);
}

#[test]
fn test_parse_rejects_malformed_and_unmatched() {
    let pos = Position::startpos();
    for text in ["", "e2", "e2e9", "i2i4", "e2e4qq", "e2e5", "e7e5", "é2e4"] {
        assert_eq!(parse_uci_move(&pos, text), None, "{text}");
    }
}

#[test]
fn test_position_startpos_with_moves() {
    let pos = set_position_from_uci(&["startpos", "moves", "e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(
        pos.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}

#[test]
fn test_position_fen_with_moves() {
    let args = ["fen", "4k3/8/8/8/8/8/8/4K2R", "w", "K", "-", "0", "1", "moves", "e1g1"];
    let pos = set_position_from_uci(&args).unwrap();
    assert_eq!(pos.to_fen(), "4k3/8/8/8/8/8/8/5RK1 b - - 1 1");
}

#[test]
fn test_position_errors() {
    assert_eq!(
        set_position_from_uci(&["startpos", "moves", "e2e5"]),
        Err(ParseError::UnknownMove("e2e5".into()))
    );
    assert_eq!(
        set_position_from_uci(&["fen", "4k3/4r3/8/8/8/8/4B3/4K3", "w", "-", "-", "moves", "e2d3"]),
        Err(ParseError::IllegalMove("e2d3".into()))
    );
    assert_eq!(
        set_position_from_uci(&["fen", "bogus", "w", "-", "-"]),
        Err(ParseError::RankCount { found: 1 })
    );
    assert_eq!(
        set_position_from_uci(&["kiwipete"]),
        Err(ParseError::PositionSource("kiwipete".into()))
    );
}
