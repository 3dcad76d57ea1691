use bitflags::bitflags;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter used by FEN and move text.
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Number of distinct (color, kind) pairs.
    pub const COUNT: usize = 12;

    /// All pieces in index order.
    pub const ALL: [Piece; 12] = [
        Piece::new(Color::White, PieceKind::Pawn),
        Piece::new(Color::White, PieceKind::Knight),
        Piece::new(Color::White, PieceKind::Bishop),
        Piece::new(Color::White, PieceKind::Rook),
        Piece::new(Color::White, PieceKind::Queen),
        Piece::new(Color::White, PieceKind::King),
        Piece::new(Color::Black, PieceKind::Pawn),
        Piece::new(Color::Black, PieceKind::Knight),
        Piece::new(Color::Black, PieceKind::Bishop),
        Piece::new(Color::Black, PieceKind::Rook),
        Piece::new(Color::Black, PieceKind::Queen),
        Piece::new(Color::Black, PieceKind::King),
    ];

    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Dense index: white pawn..king = 0..6, black pawn..king = 6..12.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.color.idx() * 6 + self.kind.idx()
    }

    pub fn from_index(idx: usize) -> Option<Piece> {
        Piece::ALL.get(idx).copied()
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }
}

bitflags! {
    /// Castling rights still held by each side.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CastlingRights: u8 {
        const WK = 0b0001;
        const WQ = 0b0010;
        const BK = 0b0100;
        const BQ = 0b1000;
    }
}

// Named squares (a8 = 0, h1 = 63)
pub const A8: u8 = 0;
pub const B8: u8 = 1;
pub const C8: u8 = 2;
pub const D8: u8 = 3;
pub const E8: u8 = 4;
pub const F8: u8 = 5;
pub const G8: u8 = 6;
pub const H8: u8 = 7;
pub const A1: u8 = 56;
pub const B1: u8 = 57;
pub const C1: u8 = 58;
pub const D1: u8 = 59;
pub const E1: u8 = 60;
pub const F1: u8 = 61;
pub const G1: u8 = 62;
pub const H1: u8 = 63;

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    7 - (sq / 8) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(((7 - rank) as u8) * 8 + (file as u8))
    } else {
        None
    }
}

/// Same file, opposite rank.
#[inline(always)]
pub const fn mirror_square(sq: u8) -> u8 {
    sq ^ 56
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'8' - (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let row = b'8' - r;
    Some(row * 8 + file)
}
