pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod fen;
pub mod magic;
pub mod makemove;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod search;
pub mod types;
pub mod uci;

pub use attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
pub use bitboard::*;
pub use board::*;
pub use config::{EngineConfig, SearchConfig};
pub use error::{ConfigError, ParseError};
pub use eval::evaluate;
pub use fen::START_FEN;
pub use makemove::MoveMode;
pub use movegen::{generate_moves, legal_moves};
pub use moves::*;
pub use perft::{perft, perft_divide};
pub use search::{INFINITY, MATE_VALUE, MAX_PLY, SearchResult, Searcher, pick_best_move};
pub use types::*;
pub use uci::*;
