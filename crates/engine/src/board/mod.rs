use crate::error::{BoardError, BoardResult};
use crate::types::*;

pub mod moves;
pub mod state;
pub mod validation;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const BACK_RANK: [u8; 8] = [ROOK, KNIGHT, BISHOP, QUEEN, KING, BISHOP, KNIGHT, ROOK];

/// Mailbox board: one packed `Piece` per square plus the side-to-move state
/// FEN carries. Cloning is cheap enough to give each search branch its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: [Piece; 64],
    pub current_turn: u8,
    pub castling_rights: u8,
    pub en_passant_target: Option<Square>,
    pub half_move_clock: u16,
    pub full_move_number: u16,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.castling_rights = ALL_CASTLING_RIGHTS;
        board.setup_starting_position();
        board
    }

    /// A board with no pieces, White to move and no castling rights.
    pub fn empty() -> Self {
        Self {
            squares: [EMPTY; 64],
            current_turn: WHITE,
            castling_rights: 0,
            en_passant_target: None,
            half_move_clock: 0,
            full_move_number: 1,
        }
    }

    fn setup_starting_position(&mut self) {
        for (file, &piece_type_val) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            self.set_piece(Square::new(file, 0), make_piece(piece_type_val, WHITE));
            self.set_piece(Square::new(file, 1), make_piece(PAWN, WHITE));
            self.set_piece(Square::new(file, 6), make_piece(PAWN, BLACK));
            self.set_piece(Square::new(file, 7), make_piece(piece_type_val, BLACK));
        }
    }

    pub fn get_piece(&self, square: Square) -> Piece {
        self.squares[square.0 as usize]
    }

    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.squares[square.0 as usize] = piece;
    }

    pub fn side_to_move(&self) -> u8 {
        self.current_turn
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|&(_, &piece)| !is_empty(piece))
            .map(|(index, &piece)| (Square(index as u8), piece))
    }

    /// Squares holding a piece of the given color.
    pub fn pieces_of(&self, color: u8) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied_squares().filter(move |&(_, piece)| piece_color(piece) == color)
    }

    pub fn piece_count(&self) -> usize {
        self.occupied_squares().count()
    }

    pub fn from_fen(fen: &str) -> BoardResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 || parts.len() > 6 {
            return Err(BoardError::fen("expected 4 to 6 space separated fields"));
        }

        let mut board = Self::empty();
        board.parse_piece_placement(parts[0])?;

        board.current_turn = match parts[1] {
            "w" => WHITE,
            "b" => BLACK,
            other => return Err(BoardError::fen(format!("invalid active color '{}'", other))),
        };

        board.parse_castling_rights(parts[2])?;
        board.en_passant_target = match parts[3] {
            "-" => None,
            text => Some(parse_square(text)?),
        };

        if let Some(clock) = parts.get(4) {
            board.half_move_clock = clock
                .parse()
                .map_err(|_| BoardError::fen(format!("invalid halfmove clock '{}'", clock)))?;
        }
        if let Some(number) = parts.get(5) {
            board.full_move_number = number
                .parse()
                .map_err(|_| BoardError::fen(format!("invalid fullmove number '{}'", number)))?;
        }

        Ok(board)
    }

    fn parse_piece_placement(&mut self, placement: &str) -> BoardResult<()> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::fen("piece placement must have 8 ranks"));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first
            let rank = 7 - rank_idx as u8;
            let mut file = 0u8;

            for ch in rank_str.chars() {
                if let Some(empty_squares) = ch.to_digit(10) {
                    file += empty_squares as u8;
                } else {
                    if file >= 8 {
                        return Err(BoardError::fen(format!("too many pieces in rank {}", rank + 1)));
                    }
                    self.set_piece(Square::new(file, rank), char_to_piece(ch)?);
                    file += 1;
                }
            }

            if file != 8 {
                return Err(BoardError::fen(format!("rank {} does not cover 8 files", rank + 1)));
            }
        }

        Ok(())
    }

    fn parse_castling_rights(&mut self, castling_str: &str) -> BoardResult<()> {
        self.castling_rights = 0;
        if castling_str == "-" {
            return Ok(());
        }

        for ch in castling_str.chars() {
            match ch {
                'K' => self.castling_rights |= WHITE_KINGSIDE,
                'Q' => self.castling_rights |= WHITE_QUEENSIDE,
                'k' => self.castling_rights |= BLACK_KINGSIDE,
                'q' => self.castling_rights |= BLACK_QUEENSIDE,
                _ => return Err(BoardError::fen(format!("invalid castling right '{}'", ch))),
            }
        }

        Ok(())
    }

    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                let piece = self.get_piece(Square::new(file, rank));
                if is_empty(piece) {
                    empty_run += 1;
                    continue;
                }
                if empty_run > 0 {
                    placement.push_str(&empty_run.to_string());
                    empty_run = 0;
                }
                placement.push(piece_to_char(piece));
            }
            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let active = if self.current_turn == WHITE { "w" } else { "b" };

        let mut castling = String::new();
        for (right, ch) in [
            (WHITE_KINGSIDE, 'K'),
            (WHITE_QUEENSIDE, 'Q'),
            (BLACK_KINGSIDE, 'k'),
            (BLACK_QUEENSIDE, 'q'),
        ] {
            if has_castling_right(self.castling_rights, right) {
                castling.push(ch);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .en_passant_target
            .map(square_to_algebraic)
            .unwrap_or_else(|| "-".to_string());

        format!(
            "{} {} {} {} {} {}",
            placement, active, castling, en_passant, self.half_move_clock, self.full_move_number
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                write!(f, "{} ", piece_to_char(self.get_piece(Square::new(file, rank))))?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

fn char_to_piece(ch: char) -> BoardResult<Piece> {
    let piece_type = match ch.to_ascii_lowercase() {
        'p' => PAWN,
        'n' => KNIGHT,
        'b' => BISHOP,
        'r' => ROOK,
        'q' => QUEEN,
        'k' => KING,
        _ => return Err(BoardError::fen(format!("unknown piece '{}'", ch))),
    };

    let color = if ch.is_ascii_uppercase() { WHITE } else { BLACK };
    Ok(make_piece(piece_type, color))
}

/// Parse a square in coordinate notation such as `e4`.
pub fn parse_square(text: &str) -> BoardResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(BoardError::InvalidSquare(text.to_string()));
    }
    let file = bytes[0].wrapping_sub(b'a');
    let rank = bytes[1].wrapping_sub(b'1');
    if file >= 8 || rank >= 8 {
        return Err(BoardError::InvalidSquare(text.to_string()));
    }
    Ok(Square::new(file, rank))
}

pub fn square_to_algebraic(square: Square) -> String {
    let file = (b'a' + square.file()) as char;
    let rank = (b'1' + square.rank()) as char;
    format!("{}{}", file, rank)
}

/// Coordinate notation for a move, with a lowercase promotion suffix (`e7e8q`).
pub fn move_to_algebraic(mv: Move) -> String {
    let from_str = square_to_algebraic(mv.from);
    let to_str = square_to_algebraic(mv.to);

    match mv.promotion {
        Some(promotion) => {
            let promotion_char = piece_to_char(make_piece(promotion, BLACK));
            format!("{}{}{}", from_str, to_str, promotion_char)
        }
        None => format!("{}{}", from_str, to_str),
    }
}
