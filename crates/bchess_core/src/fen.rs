//! Forsyth-Edwards Notation.

use crate::board::Position;
use crate::error::ParseError;
use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Decode a FEN string. The halfmove and fullmove fields may be omitted
    /// and default to 0 and 1.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(ParseError::FieldCount { found: parts.len() });
        }

        let mut pos = Position::empty();
        parse_placement(&mut pos, parts[0])?;
        pos.update_occupancy();

        for color in [Color::White, Color::Black] {
            let found = pos.bitboard(Piece::new(color, PieceKind::King)).popcount();
            if found != 1 {
                return Err(ParseError::KingCount { color, found });
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ParseError::SideToMove(other.to_string())),
        };

        pos.castling = parse_castling(parts[2])?;

        pos.en_passant = match parts[3] {
            "-" => None,
            text => {
                let sq = coord_to_sq(text)
                    .ok_or_else(|| ParseError::EnPassant(text.to_string()))?;
                // Only the square behind a double push is meaningful
                if rank_of(sq) != 2 && rank_of(sq) != 5 {
                    return Err(ParseError::EnPassant(text.to_string()));
                }
                Some(sq)
            }
        };

        pos.halfmove_clock = parse_counter(parts.get(4).copied().unwrap_or("0"))?;
        pos.fullmove_number = parse_counter(parts.get(5).copied().unwrap_or("1"))?;

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for row in 0..8u8 {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(row * 8 + file) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if row < 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        if self.castling.is_empty() {
            out.push('-');
        } else {
            for (flag, c) in [
                (CastlingRights::WK, 'K'),
                (CastlingRights::WQ, 'Q'),
                (CastlingRights::BK, 'k'),
                (CastlingRights::BQ, 'q'),
            ] {
                if self.castling.contains(flag) {
                    out.push(c);
                }
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq_to_coord(sq)),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}

fn parse_placement(pos: &mut Position, board: &str) -> Result<(), ParseError> {
    let ranks: Vec<&str> = board.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseError::RankCount { found: ranks.len() });
    }

    // FEN lists rank 8 first, which is row 0 here
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - row as u8;
        let mut file = 0u8;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                if d == 0 || d > 8 {
                    return Err(ParseError::PieceChar(ch));
                }
                file += d as u8;
            } else {
                let piece = Piece::from_char(ch).ok_or(ParseError::PieceChar(ch))?;
                if file >= 8 {
                    return Err(ParseError::RankWidth { rank });
                }
                pos.put_piece(piece, row as u8 * 8 + file);
                file += 1;
            }
            if file > 8 {
                return Err(ParseError::RankWidth { rank });
            }
        }
        if file != 8 {
            return Err(ParseError::RankWidth { rank });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, ParseError> {
    if field == "-" {
        return Ok(CastlingRights::empty());
    }
    let mut rights = CastlingRights::empty();
    for c in field.chars() {
        let flag = match c {
            'K' => CastlingRights::WK,
            'Q' => CastlingRights::WQ,
            'k' => CastlingRights::BK,
            'q' => CastlingRights::BQ,
            _ => return Err(ParseError::Castling(field.to_string())),
        };
        rights |= flag;
    }
    Ok(rights)
}

fn parse_counter(field: &str) -> Result<u32, ParseError> {
    field
        .parse()
        .map_err(|_| ParseError::Counter(field.to_string()))
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
