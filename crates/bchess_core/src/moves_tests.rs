use super::*;
use crate::types::{Color, PieceKind, coord_to_sq};

fn s(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

#[test]
fn test_fields_survive_packing() {
    let all_flags = [
        MoveFlags::QUIET,
        MoveFlags::CAPTURE,
        MoveFlags {
            double_push: true,
            ..MoveFlags::QUIET
        },
        MoveFlags {
            capture: true,
            en_passant: true,
            ..MoveFlags::QUIET
        },
        MoveFlags {
            castling: true,
            ..MoveFlags::QUIET
        },
        MoveFlags {
            capture: true,
            double_push: true,
            en_passant: true,
            castling: true,
        },
    ];
    let promotions = [
        None,
        Some(Piece::new(Color::White, PieceKind::Queen)),
        Some(Piece::new(Color::Black, PieceKind::Knight)),
        Some(Piece::new(Color::Black, PieceKind::Queen)),
    ];

    for (from, to) in [(0u8, 63u8), (63, 0), (12, 4), (52, 36)] {
        for piece in Piece::ALL {
            for promotion in promotions {
                for flags in all_flags {
                    let mv = Move::new(from, to, piece, promotion, flags);
                    assert_eq!(mv.from(), from);
                    assert_eq!(mv.to(), to);
                    assert_eq!(mv.piece(), piece);
                    assert_eq!(mv.promotion(), promotion);
                    assert_eq!(mv.flags(), flags);
                }
            }
        }
    }
}

#[test]
fn test_display_uci_text() {
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    let mv = Move::new(s("e2"), s("e4"), pawn, None, MoveFlags::QUIET);
    assert_eq!(mv.to_string(), "e2e4");

    let queen = Piece::new(Color::White, PieceKind::Queen);
    let promo = Move::new(s("e7"), s("e8"), pawn, Some(queen), MoveFlags::QUIET);
    assert_eq!(promo.to_string(), "e7e8q");

    assert_eq!(Move::NONE.to_string(), "0000");
}

#[test]
fn test_move_list_is_inline() {
    let mut list = MoveList::new();
    assert_eq!(list.capacity(), MAX_MOVES);
    list.push(Move::NONE);
    assert_eq!(list.len(), 1);
}
