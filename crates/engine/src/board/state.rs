use super::{move_to_algebraic, Board};
use crate::error::{BoardError, BoardResult};
use crate::types::*;

impl Board {
    /// Validate a move against the legal move list, then play it.
    pub fn try_make_move(&mut self, mv: Move) -> BoardResult<()> {
        if !self.get_all_legal_moves().contains(&mv) {
            return Err(BoardError::IllegalMove(move_to_algebraic(mv)));
        }
        self.make_move(mv);
        Ok(())
    }

    /// Play a move without checking legality.
    ///
    /// Handles castling rook moves, en passant captures, promotion (a pawn
    /// reaching the last rank without a promotion piece becomes a queen), the
    /// en passant target, castling rights, both clocks and the turn flip.
    pub fn make_move(&mut self, mv: Move) {
        let moving_piece = self.get_piece(mv.from);
        let captured_piece = self.get_piece(mv.to);
        let color = piece_color(moving_piece);
        let moving_type = piece_type(moving_piece);

        let is_en_passant = moving_type == PAWN
            && is_empty(captured_piece)
            && mv.from.file() != mv.to.file();
        let castling_side = self.is_castling_move(mv);

        self.update_castling_rights(mv, moving_piece, captured_piece);

        self.set_piece(mv.from, EMPTY);
        if is_en_passant {
            self.set_piece(Square::new(mv.to.file(), mv.from.rank()), EMPTY);
        }

        let last_rank = home_rank(opposite_color(color));
        let placed = if moving_type == PAWN && mv.to.rank() == last_rank {
            make_piece(mv.promotion.unwrap_or(QUEEN), color)
        } else {
            moving_piece
        };
        self.set_piece(mv.to, placed);

        if let Some(kingside) = castling_side {
            self.execute_castling_rook(color, kingside);
        }

        // Only a double pawn push leaves an en passant target behind
        self.en_passant_target = if moving_type == PAWN && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
            Some(Square::new(mv.from.file(), (mv.from.rank() + mv.to.rank()) / 2))
        } else {
            None
        };

        if moving_type == PAWN || !is_empty(captured_piece) {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock += 1;
        }

        if color == BLACK {
            self.full_move_number += 1;
        }
        self.current_turn = opposite_color(color);
    }

    /// `Some(kingside)` when `mv` is a king moving two files along its back rank.
    pub fn is_castling_move(&self, mv: Move) -> Option<bool> {
        let piece = self.get_piece(mv.from);
        if piece_type(piece) != KING || mv.from.rank() != mv.to.rank() {
            return None;
        }
        match mv.to.file() as i8 - mv.from.file() as i8 {
            2 => Some(true),
            -2 => Some(false),
            _ => None,
        }
    }

    fn execute_castling_rook(&mut self, color: u8, kingside: bool) {
        let rank = home_rank(color);
        let (rook_from, rook_to) = if kingside { (7, 5) } else { (0, 3) };
        let rook = self.get_piece(Square::new(rook_from, rank));
        self.set_piece(Square::new(rook_from, rank), EMPTY);
        self.set_piece(Square::new(rook_to, rank), rook);
    }

    fn update_castling_rights(&mut self, mv: Move, moving_piece: Piece, captured_piece: Piece) {
        if piece_type(moving_piece) == KING {
            if piece_color(moving_piece) == WHITE {
                remove_castling_right(&mut self.castling_rights, WHITE_KINGSIDE | WHITE_QUEENSIDE);
            } else {
                remove_castling_right(&mut self.castling_rights, BLACK_KINGSIDE | BLACK_QUEENSIDE);
            }
        }

        // A rook leaving its corner, or being captured there
        for (square, piece) in [(mv.from, moving_piece), (mv.to, captured_piece)] {
            if piece_type(piece) != ROOK {
                continue;
            }
            match (square.file(), square.rank()) {
                (0, 0) => remove_castling_right(&mut self.castling_rights, WHITE_QUEENSIDE),
                (7, 0) => remove_castling_right(&mut self.castling_rights, WHITE_KINGSIDE),
                (0, 7) => remove_castling_right(&mut self.castling_rights, BLACK_QUEENSIDE),
                (7, 7) => remove_castling_right(&mut self.castling_rights, BLACK_KINGSIDE),
                _ => {}
            }
        }
    }

    /// Check if castling is possible for a given color and side
    pub fn can_castle(&self, color: u8, kingside: bool) -> bool {
        let castling_right = match (color, kingside) {
            (WHITE, true) => WHITE_KINGSIDE,
            (WHITE, false) => WHITE_QUEENSIDE,
            (_, true) => BLACK_KINGSIDE,
            (_, false) => BLACK_QUEENSIDE,
        };

        if !has_castling_right(self.castling_rights, castling_right) {
            return false;
        }

        let king_rank = home_rank(color);
        let king_start = Square::new(4, king_rank);

        // (rook file, squares that must be empty, squares the king crosses)
        let (rook_file, must_be_empty, king_path): (u8, &[u8], [u8; 2]) = if kingside {
            (7, &[5, 6], [5, 6])
        } else {
            (0, &[1, 2, 3], [3, 2])
        };

        if self.get_piece(king_start) != make_piece(KING, color)
            || self.get_piece(Square::new(rook_file, king_rank)) != make_piece(ROOK, color)
        {
            return false;
        }

        if must_be_empty
            .iter()
            .any(|&file| !is_empty(self.get_piece(Square::new(file, king_rank))))
        {
            return false;
        }

        let opponent_color = opposite_color(color);
        if self.is_under_threat(king_start, opponent_color) {
            return false;
        }

        !king_path
            .iter()
            .any(|&file| self.is_under_threat(Square::new(file, king_rank), opponent_color))
    }
}
