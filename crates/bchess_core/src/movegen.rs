//! Pseudo-legal move generation.
//!
//! [`generate_moves`] emits every move that obeys piece movement rules but
//! may leave the mover's king attacked; [`Position::make_move`] rejects
//! those. Castling is the one exception: the king's start and transit
//! squares are checked here, the landing square by make.

use crate::attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::makemove::{CASTLE_PATHS, MoveMode};
use crate::moves::{Move, MoveFlags, MoveList};
use crate::types::*;

/// Append all pseudo-legal moves for the side to move.
pub fn generate_moves(pos: &Position, moves: &mut MoveList) {
    let us = pos.side_to_move;
    let own = pos.occupied_by(us);
    let enemy = pos.occupied_by(us.other());
    let occ = pos.occupied();

    gen_pawns(pos, us, enemy, occ, moves);

    for kind in [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ] {
        let piece = Piece::new(us, kind);
        for from in pos.bitboard(piece) {
            let targets = match kind {
                PieceKind::Knight => knight_attacks(from),
                PieceKind::Bishop => bishop_attacks(from, occ),
                PieceKind::Rook => rook_attacks(from, occ),
                PieceKind::Queen => queen_attacks(from, occ),
                PieceKind::King => king_attacks(from),
                PieceKind::Pawn => Bitboard::EMPTY,
            } & !own;
            for to in targets {
                let flags = if enemy.contains(to) {
                    MoveFlags::CAPTURE
                } else {
                    MoveFlags::QUIET
                };
                moves.push(Move::new(from, to, piece, None, flags));
            }
        }
    }

    gen_castling(pos, us, occ, moves);
}

/// Legal moves only: pseudo-legal moves that survive make on a copy.
pub fn legal_moves(pos: &Position) -> MoveList {
    let mut pseudo = MoveList::new();
    generate_moves(pos, &mut pseudo);
    pseudo
        .into_iter()
        .filter(|&mv| {
            let mut copy = *pos;
            copy.make_move(mv, MoveMode::AllMoves)
        })
        .collect()
}

fn gen_pawns(pos: &Position, us: Color, enemy: Bitboard, occ: Bitboard, moves: &mut MoveList) {
    let piece = Piece::new(us, PieceKind::Pawn);
    let (start_rank, promo_rank) = match us {
        Color::White => (Bitboard::RANK_2, Bitboard::RANK_8),
        Color::Black => (Bitboard::RANK_7, Bitboard::RANK_1),
    };
    let forward = |bb: Bitboard| match us {
        Color::White => bb.north(),
        Color::Black => bb.south(),
    };

    for from in pos.bitboard(piece) {
        let from_bb = Bitboard::from_square(from);

        let single = forward(from_bb) & !occ;
        if let Some(to) = single.lsb() {
            push_pawn_move(moves, from, to, piece, promo_rank.contains(to), MoveFlags::QUIET);

            if !(from_bb & start_rank).is_empty()
                && let Some(to2) = (forward(single) & !occ).lsb()
            {
                let flags = MoveFlags {
                    double_push: true,
                    ..MoveFlags::QUIET
                };
                moves.push(Move::new(from, to2, piece, None, flags));
            }
        }

        let attacks = pawn_attacks(from, us);
        for to in attacks & enemy {
            push_pawn_move(moves, from, to, piece, promo_rank.contains(to), MoveFlags::CAPTURE);
        }

        if let Some(ep) = pos.en_passant
            && attacks.contains(ep)
        {
            let flags = MoveFlags {
                capture: true,
                en_passant: true,
                ..MoveFlags::QUIET
            };
            moves.push(Move::new(from, ep, piece, None, flags));
        }
    }
}

/// One move, or four when the pawn reaches the last rank.
fn push_pawn_move(
    moves: &mut MoveList,
    from: u8,
    to: u8,
    piece: Piece,
    promotes: bool,
    flags: MoveFlags,
) {
    if promotes {
        for kind in PieceKind::PROMOTIONS {
            let promo = Piece::new(piece.color, kind);
            moves.push(Move::new(from, to, piece, Some(promo), flags));
        }
    } else {
        moves.push(Move::new(from, to, piece, None, flags));
    }
}

fn gen_castling(pos: &Position, us: Color, occ: Bitboard, moves: &mut MoveList) {
    let king = Piece::new(us, PieceKind::King);
    let rook = Piece::new(us, PieceKind::Rook);
    let them = us.other();

    for path in CASTLE_PATHS.iter().filter(|p| p.color == us) {
        if pos.castling.contains(path.right)
            && pos.bitboard(king).contains(path.king_from)
            && pos.bitboard(rook).contains(path.rook_from)
            && (occ & path.between).is_empty()
            && !pos.is_square_attacked(path.king_from, them)
            && !pos.is_square_attacked(path.transit, them)
        {
            let flags = MoveFlags {
                castling: true,
                ..MoveFlags::QUIET
            };
            moves.push(Move::new(path.king_from, path.king_to, king, None, flags));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
