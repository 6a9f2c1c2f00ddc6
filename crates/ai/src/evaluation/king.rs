use crate::types::Score;
use engine::{
    opposite_color, pawn_direction, piece_color, piece_type, Board, BISHOP, KING, PAWN, QUEEN, ROOK,
};

use super::{
    both_sides, has_piece, relative_rank, relative_square, GamePhase, EARLY_DEVELOPMENT_MAX,
    ROOK_OR_QUEEN,
};

pub fn early_king_movement(board: &Board) -> Score {
    both_sides(|color| {
        board
            .pieces_of(color)
            .filter(|&(_, piece)| piece_type(piece) == KING)
            .map(|(square, _)| relative_rank(square, color) as Score)
            .filter(|&rank| rank > 0)
            .map(|rank| -50 - 10 * rank)
            .sum()
    })
}

/// Castled kings earn 40. A king still on e1 earns a little for each rook
/// that could still castle with it.
pub fn castling(board: &Board) -> Score {
    both_sides(|color| {
        let Some(king) = board.find_king(color) else {
            return 0;
        };

        if king == relative_square(6, 0, color) || king == relative_square(2, 0, color) {
            return 40;
        }

        let mut score = 0;
        if king == relative_square(4, 0, color) {
            if has_piece(board, relative_square(7, 0, color), ROOK, color) {
                score += 15;
            }
            if has_piece(board, relative_square(0, 0, color), ROOK, color) {
                score += 10;
            }
        }
        score
    })
}

/// A king castled short whose f-pawn has moved up one square, with extra
/// penalties when enemy pieces already point down the opened lines.
pub fn king_pawn_shield(board: &Board, phase: &GamePhase) -> Score {
    if phase.off_home_square > EARLY_DEVELOPMENT_MAX {
        return 0;
    }

    both_sides(|color| {
        let Some(king) = board.find_king(color) else {
            return 0;
        };
        if king != relative_square(6, 0, color) || !has_piece(board, relative_square(5, 2, color), PAWN, color) {
            return 0;
        }

        let enemy = opposite_color(color);
        let mut score = -80;

        let heavy_on_f_file = (3..8).any(|rank| {
            let piece = board.get_piece(relative_square(5, rank, color));
            piece_color(piece) == enemy && ROOK_OR_QUEEN.contains(&piece_type(piece))
        });
        if heavy_on_f_file {
            score -= 50;
        }

        // The diagonal the f2 pawn used to block
        let on_diagonal = board.cast_ray(king, -1, pawn_direction(color));
        if let Some((_, piece)) = on_diagonal {
            if piece_color(piece) == enemy && matches!(piece_type(piece), BISHOP | QUEEN) {
                score -= 60;
            }
        }

        score
    })
}
