//! Static position evaluation.
//!
//! Every term is written once from one side's point of view and combined as
//! `side(WHITE) - side(BLACK)`, so the final score is positive for White and
//! negated by mirroring the board.

mod center;
mod development;
mod king;
mod knights;
mod material;
mod pawns;

use crate::types::Score;
use engine::{
    home_rank, is_piece_color, make_piece, opposite_color, piece_color, piece_type, Board, Square,
    BISHOP, BLACK, KING, KNIGHT, PAWN, QUEEN, ROOK, WHITE,
};
use serde::Serialize;

pub use center::center_control;
pub use development::{early_queen_development, minor_piece_defense, piece_development};
pub use king::{castling, early_king_movement, king_pawn_shield};
pub use knights::knight_placement;
pub use material::material;
pub use pawns::{early_f_pawn, pawn_double_moves, undefended_pawns};

/// "Opening" holds while fewer than this many pieces have left their back rank.
pub const OPENING_DEVELOPED_LIMIT: u32 = 7;

/// Early-development terms stay active while at most this many pieces have
/// left their home squares.
pub const EARLY_DEVELOPMENT_MAX: u32 = 6;

/// Pawn double-move penalties only apply while this many pieces remain.
pub const FULL_BOARD_PIECES: u32 = 28;

/// How far the game has progressed, counted once per evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GamePhase {
    /// Non-pawn, non-king pieces standing off their own back rank.
    pub off_back_rank: u32,
    /// Non-pawn, non-king pieces that have left their home square. Knights
    /// count by file only, queens by their exact square.
    pub off_home_square: u32,
    /// All pieces on the board, kings included.
    pub piece_count: u32,
}

impl GamePhase {
    pub fn from_board(board: &Board) -> Self {
        let mut phase = Self::default();

        for (square, piece) in board.occupied_squares() {
            phase.piece_count += 1;

            let color = piece_color(piece);
            let on_back_rank = square.rank() == home_rank(color);
            let kind = piece_type(piece);
            if kind == PAWN || kind == KING {
                continue;
            }

            if !on_back_rank {
                phase.off_back_rank += 1;
            }

            let left_home = match kind {
                KNIGHT => square.file() != 1 && square.file() != 6,
                QUEEN => square != relative_square(3, 0, color),
                _ => !on_back_rank,
            };
            if left_home {
                phase.off_home_square += 1;
            }
        }

        phase
    }
}

/// Per-term scores for one position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvalBreakdown {
    pub phase: GamePhase,
    pub material: Score,
    pub center_control: Score,
    pub knight_placement: Score,
    pub early_queen: Score,
    pub piece_development: Score,
    pub early_king: Score,
    pub castling: Score,
    pub pawn_double_moves: Score,
    pub undefended_pawns: Score,
    pub king_pawn_shield: Score,
    pub minor_piece_defense: Score,
    pub early_f_pawn: Score,
}

impl EvalBreakdown {
    pub fn total(&self) -> Score {
        self.material
            + self.center_control
            + self.knight_placement
            + self.early_queen
            + self.piece_development
            + self.early_king
            + self.castling
            + self.pawn_double_moves
            + self.undefended_pawns
            + self.king_pawn_shield
            + self.minor_piece_defense
            + self.early_f_pawn
    }

    /// `(name, score)` pairs in evaluation order.
    pub fn terms(&self) -> [(&'static str, Score); 12] {
        [
            ("material", self.material),
            ("center control", self.center_control),
            ("knight placement", self.knight_placement),
            ("early queen", self.early_queen),
            ("piece development", self.piece_development),
            ("early king", self.early_king),
            ("castling", self.castling),
            ("pawn double moves", self.pawn_double_moves),
            ("undefended pawns", self.undefended_pawns),
            ("king pawn shield", self.king_pawn_shield),
            ("minor piece defense", self.minor_piece_defense),
            ("early f-pawn", self.early_f_pawn),
        ]
    }
}

/// Hand-tuned static evaluator. Stateless; `evaluate` is a pure function of the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, board: &Board) -> Score {
        self.breakdown(board).total()
    }

    pub fn breakdown(&self, board: &Board) -> EvalBreakdown {
        let phase = GamePhase::from_board(board);

        EvalBreakdown {
            phase,
            material: material(board),
            center_control: center_control(board, &phase),
            knight_placement: knight_placement(board),
            early_queen: early_queen_development(board),
            piece_development: piece_development(board),
            early_king: early_king_movement(board),
            castling: castling(board),
            pawn_double_moves: pawn_double_moves(board, &phase),
            undefended_pawns: undefended_pawns(board, &phase),
            king_pawn_shield: king_pawn_shield(board, &phase),
            minor_piece_defense: minor_piece_defense(board, &phase),
            early_f_pawn: early_f_pawn(board, &phase),
        }
    }
}

/// Combine a one-sided term into a White-positive score.
pub(crate) fn both_sides(side: impl Fn(u8) -> Score) -> Score {
    side(WHITE) - side(BLACK)
}

/// Rank counted from `color`'s own back rank.
pub(crate) fn relative_rank(square: Square, color: u8) -> u8 {
    if color == WHITE { square.rank() } else { 7 - square.rank() }
}

/// The square at `file` and `rank` as seen from `color`'s side of the board.
pub(crate) fn relative_square(file: u8, rank: u8, color: u8) -> Square {
    if color == BLACK {
        Square::new(file, 7 - rank)
    } else {
        Square::new(file, rank)
    }
}

pub(crate) fn attacked_by_enemy(board: &Board, square: Square, color: u8) -> bool {
    board.is_under_threat(square, opposite_color(color))
}

pub(crate) fn has_piece(board: &Board, square: Square, kind: u8, color: u8) -> bool {
    board.get_piece(square) == make_piece(kind, color)
}

/// Files c-f and ranks 3-6.
pub(crate) fn is_central(square: Square) -> bool {
    (2..=5).contains(&square.file()) && (2..=5).contains(&square.rank())
}

/// Adjacent to `target` (diagonals included) or a knight's jump away.
pub(crate) fn covers(from: Square, target: Square) -> bool {
    let file_diff = from.file().abs_diff(target.file());
    let rank_diff = from.rank().abs_diff(target.rank());
    (file_diff <= 1 && rank_diff <= 1) || (file_diff == 1 && rank_diff == 2) || (file_diff == 2 && rank_diff == 1)
}

/// Knight on b1/g1 or bishop on c1/f1 (mirrored for Black).
pub(crate) fn is_undeveloped_minor(square: Square, piece: u8) -> bool {
    let color = piece_color(piece);
    if relative_rank(square, color) != 0 {
        return false;
    }
    match piece_type(piece) {
        KNIGHT => square.file() == 1 || square.file() == 6,
        BISHOP => square.file() == 2 || square.file() == 5,
        _ => false,
    }
}

/// Own pawns that are attacked and not defended.
pub(crate) fn pawns_needing_defense(board: &Board, color: u8) -> Vec<Square> {
    board
        .pieces_of(color)
        .filter(|&(square, piece)| {
            piece_type(piece) == PAWN
                && attacked_by_enemy(board, square, color)
                && !board.is_under_threat(square, color)
        })
        .map(|(square, _)| square)
        .collect()
}

pub(crate) fn is_own(board: &Board, square: Square, color: u8) -> bool {
    is_piece_color(board.get_piece(square), color)
}

pub(crate) const ROOK_OR_QUEEN: [u8; 2] = [ROOK, QUEEN];
