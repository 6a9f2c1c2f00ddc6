use crate::types::Score;
use engine::{piece_type, Board, Square, PAWN};

use super::{attacked_by_enemy, both_sides, is_own, GamePhase, OPENING_DEVELOPED_LIMIT};

/// d4, d5, e4, e5.
pub const CENTER_SQUARES: [Square; 4] = [Square(27), Square(35), Square(28), Square(36)];

/// Occupying and attacking the four central squares. Bonuses grow while the
/// opening holds.
pub fn center_control(board: &Board, phase: &GamePhase) -> Score {
    let opening = phase.off_back_rank < OPENING_DEVELOPED_LIMIT;
    both_sides(|color| {
        let mut score = 0;

        for square in CENTER_SQUARES {
            if is_own(board, square, color) {
                let base = if piece_type(board.get_piece(square)) == PAWN { 20 } else { 10 };
                score += if opening { base * 2 } else { base };

                if attacked_by_enemy(board, square, color) {
                    score -= 5;
                }
            }

            if board.is_under_threat(square, color) {
                score += if opening { 15 } else { 5 };
            }
        }

        score
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(fen: &str) -> Score {
        let board = Board::from_fen(fen).unwrap();
        center_control(&board, &GamePhase::from_board(&board))
    }

    #[test]
    fn test_start_position_is_balanced() {
        assert_eq!(center("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"), 0);
    }

    #[test]
    fn test_occupied_pawn_in_opening() {
        // 40 for the pawn on d4, 15 for attacking e5
        assert_eq!(center("4k3/8/8/8/3P4/8/8/4K3 w - - 0 1"), 55);
    }

    #[test]
    fn test_attacked_occupant_loses_five() {
        // Each side: 40 for the pawn, -5 since it is attacked, 15 for the square it hits
        assert_eq!(center("4k3/8/8/4p3/3P4/8/8/4K3 w - - 0 1"), 0);
    }

    #[test]
    fn test_bonuses_shrink_after_the_opening() {
        // Seven white knights off the back rank end the opening
        let board = Board::from_fen("4k3/8/8/8/3P4/NNNNNNN1/8/4K3 w - - 0 1").unwrap();
        let phase = GamePhase::from_board(&board);
        assert_eq!(phase.off_back_rank, 7);
        // 20 for the d4 pawn, 5 for each of the four attacked squares
        assert_eq!(center_control(&board, &phase), 40);
    }
}
