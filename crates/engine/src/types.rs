/// A board square as a 0..64 index, rank-major from a1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(pub u8);

impl Square {
    pub fn new(file: u8, rank: u8) -> Self {
        Self(rank * 8 + file)
    }

    /// Build a square from signed coordinates, `None` when off the board.
    pub fn try_new(file: i8, rank: i8) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    pub fn file(&self) -> u8 {
        self.0 % 8
    }

    pub fn rank(&self) -> u8 {
        self.0 / 8
    }

    /// The square `df` files and `dr` ranks away, if it is still on the board.
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        Self::try_new(self.file() as i8 + df, self.rank() as i8 + dr)
    }

    /// Same file, rank seen from the other side of the board.
    pub fn flip_rank(&self) -> Self {
        Self::new(self.file(), 7 - self.rank())
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

// 4-bit piece representation
// Bits 0-2: piece type (0=empty, 1=pawn, 2=knight, 3=bishop, 4=rook, 5=queen, 6=king)
// Bit 3: color (0=black, 1=white)
pub type Piece = u8;

pub const EMPTY: u8 = 0;

// Piece types (bits 0-2)
pub const PAWN: u8 = 1;
pub const KNIGHT: u8 = 2;
pub const BISHOP: u8 = 3;
pub const ROOK: u8 = 4;
pub const QUEEN: u8 = 5;
pub const KING: u8 = 6;

// Colors (bit 3)
pub const BLACK: u8 = 0;
pub const WHITE: u8 = 8;

/// Centipawn values indexed by piece type.
pub const PIECE_VALUES: [i32; 7] = [
    0,     // Empty
    100,   // Pawn
    320,   // Knight
    330,   // Bishop
    500,   // Rook
    900,   // Queen
    20000, // King
];

pub fn make_piece(piece_type: u8, color: u8) -> Piece {
    piece_type | color
}

pub fn piece_type(piece: Piece) -> u8 {
    piece & 7
}

pub fn piece_color(piece: Piece) -> u8 {
    piece & 8
}

pub fn is_white(piece: Piece) -> bool {
    piece_color(piece) == WHITE
}

pub fn is_empty(piece: Piece) -> bool {
    piece == EMPTY
}

/// Unsigned material value of a piece; 0 for an empty square.
pub fn piece_value(piece: Piece) -> i32 {
    PIECE_VALUES[piece_type(piece) as usize]
}

pub fn opposite_color(color: u8) -> u8 {
    color ^ WHITE
}

/// True when the square holds a piece of `color`.
pub fn is_piece_color(piece: Piece, color: u8) -> bool {
    !is_empty(piece) && piece_color(piece) == color
}

/// Back rank index for a color (0 for White, 7 for Black).
pub fn home_rank(color: u8) -> u8 {
    if color == WHITE { 0 } else { 7 }
}

/// Direction pawns of `color` advance in.
pub fn pawn_direction(color: u8) -> i8 {
    if color == WHITE { 1 } else { -1 }
}

pub fn piece_to_char(piece: Piece) -> char {
    let ch = match piece_type(piece) {
        PAWN => 'p',
        KNIGHT => 'n',
        BISHOP => 'b',
        ROOK => 'r',
        QUEEN => 'q',
        KING => 'k',
        _ => return '.',
    };
    if is_white(piece) { ch.to_ascii_uppercase() } else { ch }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<u8>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to, promotion: None }
    }

    pub fn new_promotion(from: Square, to: Square, promotion: u8) -> Self {
        Self { from, to, promotion: Some(promotion) }
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

// Castling rights bitfield constants
pub const WHITE_KINGSIDE: u8 = 0b0001;
pub const WHITE_QUEENSIDE: u8 = 0b0010;
pub const BLACK_KINGSIDE: u8 = 0b0100;
pub const BLACK_QUEENSIDE: u8 = 0b1000;
pub const ALL_CASTLING_RIGHTS: u8 = 0b1111;

pub fn has_castling_right(castling_rights: u8, right: u8) -> bool {
    castling_rights & right != 0
}

pub fn remove_castling_right(castling_rights: &mut u8, right: u8) {
    *castling_rights &= !right;
}
