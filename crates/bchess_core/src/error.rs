//! Error types for decoding positions, moves and configuration.

use thiserror::Error;

use crate::types::Color;

/// Failure to decode a FEN string or a move in text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 4 to 6 FEN fields, found {found}")]
    FieldCount { found: usize },

    #[error("expected 8 ranks in piece placement, found {found}")]
    RankCount { found: usize },

    #[error("invalid piece character '{0}' in piece placement")]
    PieceChar(char),

    #[error("rank {rank} does not describe exactly 8 squares")]
    RankWidth { rank: u8 },

    #[error("{color:?} must have exactly one king, found {found}")]
    KingCount { color: Color, found: u32 },

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling field '{0}'")]
    Castling(String),

    #[error("invalid en passant square '{0}'")]
    EnPassant(String),

    #[error("invalid move counter '{0}'")]
    Counter(String),

    #[error("expected 'startpos' or 'fen', found '{0}'")]
    PositionSource(String),

    #[error("'{0}' does not name a move in this position")]
    UnknownMove(String),

    #[error("move '{0}' leaves the king in check")]
    IllegalMove(String),
}

/// Failure to load an engine configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
