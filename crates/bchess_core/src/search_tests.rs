use super::*;
use crate::types::Color;
use crate::uci::parse_uci_move;

fn fen(f: &str) -> Position {
    Position::from_fen(f).unwrap()
}

#[test]
fn test_back_rank_mate_in_one() {
    let pos = fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let result = Searcher::default().search(&pos, 2);
    assert_eq!(result.best_move.unwrap().to_string(), "e1e8");
    assert_eq!(result.score, MATE_VALUE - 1);
    assert_eq!(result.mate_in(), Some(1));
    assert!(result.nodes > 0);
}

#[test]
fn test_rook_ladder_mate_in_two() {
    let pos = fen("6k1/8/8/8/8/8/R7/1R4K1 w - - 0 1");
    let result = Searcher::default().search(&pos, 4);
    assert_eq!(result.score, MATE_VALUE - 3);
    assert_eq!(result.mate_in(), Some(2));

    // Every reply still allows mate next move
    let mut after = pos;
    assert!(after.make_move(result.best_move.unwrap(), MoveMode::AllMoves));
    let reply = Searcher::default().search(&after, 3);
    assert_eq!(reply.score, -(MATE_VALUE - 2));
    assert_eq!(reply.mate_in(), Some(-1));
}

#[test]
fn test_checkmated_root() {
    // Fool's mate
    let pos = fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    let result = Searcher::default().search(&pos, 3);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -MATE_VALUE);
    assert_eq!(result.mate_in(), Some(0));
}

#[test]
fn test_stalemate_scores_zero() {
    let pos = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(!pos.in_check(Color::Black));
    let result = Searcher::default().search(&pos, 3);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
    assert_eq!(result.mate_in(), None);
}

#[test]
fn test_wins_hanging_queen() {
    let pos = fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let (mv, score) = pick_best_move(&pos, 2).unwrap();
    assert_eq!(mv.to_string(), "d2d5");
    assert!(score > 400);
}

#[test]
fn test_depth_zero_goes_to_quiescence() {
    let pos = Position::startpos();
    let result = Searcher::default().search(&pos, 0);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
}

#[test]
fn test_search_is_repeatable() {
    let pos = fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let mut searcher = Searcher::default();
    let first = searcher.search(&pos, 3);
    let second = searcher.search(&pos, 3);
    assert_eq!(first, second);
    assert!(first.best_move.is_some());
}

#[test]
fn test_no_check_extensions_still_finds_mate() {
    let pos = fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let mut searcher = Searcher::new(SearchConfig {
        max_check_extensions: 0,
    });
    let result = searcher.search(&pos, 2);
    assert_eq!(result.score, MATE_VALUE - 1);
    assert_eq!(searcher.config().max_check_extensions, 0);
}

#[test]
fn test_pick_best_move_without_moves() {
    let pos = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert_eq!(pick_best_move(&pos, 2), None);
}

#[test]
fn test_ordering_puts_captures_before_killers() {
    let pos = fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
    let mut searcher = Searcher::default();
    let quiet = parse_uci_move(&pos, "e1f1").unwrap();
    searcher.killers[0][0] = quiet;

    let mut moves = MoveList::new();
    generate_moves(&pos, &mut moves);
    searcher.sort_moves(&pos, &mut moves, 0);

    assert_eq!(moves[0].to_string(), "d2d5");
    assert_eq!(moves[1], quiet);
    // Rook takes queen: victim queen, attacker rook
    assert_eq!(searcher.score_move(&pos, moves[0], 0), 502 + 100);
    assert_eq!(searcher.score_move(&pos, quiet, 0), 90);
}

#[test]
fn test_mvv_lva_prefers_cheap_attackers() {
    let pawn_takes_queen = MVV_LVA[Piece::new(Color::White, PieceKind::Pawn).index()]
        [Piece::new(Color::Black, PieceKind::Queen).index()];
    let queen_takes_pawn = MVV_LVA[Piece::new(Color::White, PieceKind::Queen).index()]
        [Piece::new(Color::Black, PieceKind::Pawn).index()];
    assert_eq!(pawn_takes_queen, 505);
    assert_eq!(queen_takes_pawn, 101);
}

#[test]
fn test_mate_in_ordinary_score() {
    let result = SearchResult {
        best_move: None,
        score: 250,
        depth: 4,
        nodes: 1,
    };
    assert_eq!(result.mate_in(), None);
}
