use super::Board;
use crate::bitboard::{get_king_attacks, get_knight_attacks, index_to_square, iterate_bits};
use crate::types::*;

const PROMOTION_PIECES: [u8; 4] = [QUEEN, ROOK, BISHOP, KNIGHT];

impl Board {
    /// Generate all legal moves for the current player.
    ///
    /// Moves come out in a fixed order: origin squares from a1 to h8, then the
    /// piece's own target order, promotions expanded as Q, R, B, N.
    pub fn get_all_legal_moves(&self) -> Vec<Move> {
        let mut all_moves = Vec::new();
        let color = self.current_turn;

        for (square, piece) in self.pieces_of(color) {
            let promotion_rank = home_rank(opposite_color(color));
            for target_square in self.get_pseudo_legal_moves(square) {
                if piece_type(piece) == PAWN && target_square.rank() == promotion_rank {
                    for &promotion_piece in &PROMOTION_PIECES {
                        all_moves.push(Move::new_promotion(square, target_square, promotion_piece));
                    }
                } else {
                    all_moves.push(Move::new(square, target_square));
                }
            }
        }

        all_moves.retain(|&mv| self.leaves_king_safe(mv));
        all_moves
    }

    /// Legal target squares for the piece on `square`, which must belong to
    /// the side to move.
    pub fn get_legal_moves(&self, square: Square) -> Vec<Square> {
        if !is_piece_color(self.get_piece(square), self.current_turn) {
            return Vec::new();
        }
        self.get_pseudo_legal_moves(square)
            .into_iter()
            .filter(|&target| self.leaves_king_safe(Move::new(square, target)))
            .collect()
    }

    fn leaves_king_safe(&self, mv: Move) -> bool {
        let mover = piece_color(self.get_piece(mv.from));
        let mut next = self.clone();
        next.make_move(mv);
        !next.is_king_attacked(mover)
    }

    /// Pseudo-legal target squares for whichever piece stands on `square`,
    /// of either color. Self-check is not filtered. En passant and castling
    /// are only produced for the side to move.
    pub fn get_pseudo_legal_moves(&self, square: Square) -> Vec<Square> {
        let piece = self.get_piece(square);
        if is_empty(piece) {
            return Vec::new();
        }

        match piece_type(piece) {
            KNIGHT => self.get_step_moves(square, get_knight_attacks(square.0)),
            ROOK => self.get_sliding_moves(square, &[(0, 1), (0, -1), (1, 0), (-1, 0)]),
            BISHOP => self.get_sliding_moves(square, &[(1, 1), (1, -1), (-1, 1), (-1, -1)]),
            QUEEN => self.get_sliding_moves(
                square,
                &[(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (1, -1), (-1, 1), (-1, -1)],
            ),
            KING => self.get_king_moves(square),
            PAWN => self.get_pawn_moves(square, piece_color(piece)),
            _ => Vec::new(),
        }
    }

    pub fn get_pawn_moves(&self, square: Square, color: u8) -> Vec<Square> {
        let mut moves = Vec::new();
        let direction = pawn_direction(color);

        if let Some(forward_square) = square.offset(0, direction) {
            if is_empty(self.get_piece(forward_square)) {
                moves.push(forward_square);

                let starting_rank = if color == WHITE { 1 } else { 6 };
                if square.rank() == starting_rank {
                    if let Some(double_forward) = forward_square.offset(0, direction) {
                        if is_empty(self.get_piece(double_forward)) {
                            moves.push(double_forward);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(capture_square) = square.offset(df, direction) else {
                continue;
            };
            let target_piece = self.get_piece(capture_square);
            if is_piece_color(target_piece, opposite_color(color)) {
                moves.push(capture_square);
            } else if color == self.current_turn && self.en_passant_target == Some(capture_square) {
                // The captured pawn sits beside us, on the target's file
                let victim_square = Square::new(capture_square.file(), square.rank());
                if self.get_piece(victim_square) == make_piece(PAWN, opposite_color(color)) {
                    moves.push(capture_square);
                }
            }
        }

        moves
    }

    /// Targets from a precomputed step mask, minus squares holding our own pieces.
    fn get_step_moves(&self, square: Square, mask: u64) -> Vec<Square> {
        let source_color = piece_color(self.get_piece(square));
        iterate_bits(mask)
            .map(index_to_square)
            .filter(|&target| !is_piece_color(self.get_piece(target), source_color))
            .collect()
    }

    fn get_king_moves(&self, square: Square) -> Vec<Square> {
        let source_color = piece_color(self.get_piece(square));
        let mut moves = self.get_step_moves(square, get_king_attacks(square.0));

        if source_color == self.current_turn {
            if self.can_castle(source_color, true) {
                moves.push(Square::new(6, square.rank()));
            }
            if self.can_castle(source_color, false) {
                moves.push(Square::new(2, square.rank()));
            }
        }

        moves
    }

    fn get_sliding_moves(&self, square: Square, directions: &[(i8, i8)]) -> Vec<Square> {
        let mut moves = Vec::new();
        let source_color = piece_color(self.get_piece(square));

        for &(df, dr) in directions {
            let mut current = square;
            while let Some(target_square) = current.offset(df, dr) {
                let target_piece = self.get_piece(target_square);
                if is_empty(target_piece) {
                    moves.push(target_square);
                } else {
                    if piece_color(target_piece) != source_color {
                        moves.push(target_square);
                    }
                    break;
                }
                current = target_square;
            }
        }

        moves
    }
}
