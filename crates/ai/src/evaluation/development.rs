use crate::types::Score;
use engine::{piece_type, Board, Square, BISHOP, KNIGHT, PAWN, QUEEN, ROOK};

use super::{
    attacked_by_enemy, both_sides, covers, is_central, is_undeveloped_minor, pawns_needing_defense,
    relative_square, GamePhase, EARLY_DEVELOPMENT_MAX,
};

const GOOD_KNIGHT_SQUARES: [(u8, u8); 4] = [(2, 2), (5, 2), (3, 2), (4, 2)];
const GOOD_BISHOP_SQUARES: [(u8, u8); 6] = [(2, 2), (5, 2), (3, 1), (4, 1), (1, 2), (6, 2)];

/// Penalise a queen that has left d1, more the further it wandered.
pub fn early_queen_development(board: &Board) -> Score {
    both_sides(|color| {
        let home = relative_square(3, 0, color);
        board
            .pieces_of(color)
            .filter(|&(square, piece)| piece_type(piece) == QUEEN && square != home)
            .map(|(square, _)| {
                let distance = square.file().abs_diff(home.file()) + square.rank().abs_diff(home.rank());
                -15 - 2 * distance as Score
            })
            .sum()
    })
}

/// Undeveloped minors cost points, minors on natural squares earn them, and
/// pieces that moved somewhere pointless without being chased are penalised.
pub fn piece_development(board: &Board) -> Score {
    both_sides(|color| {
        let pawns_attacked = board
            .pieces_of(color)
            .any(|(square, piece)| piece_type(piece) == PAWN && attacked_by_enemy(board, square, color));

        let mut score = 0;
        for (square, piece) in board.pieces_of(color) {
            if is_undeveloped_minor(square, piece) {
                score -= if pawns_attacked { 80 } else { 40 };
                continue;
            }

            let attacked = attacked_by_enemy(board, square, color);
            let on_any = |squares: &[(u8, u8)]| {
                squares.iter().any(|&(file, rank)| relative_square(file, rank, color) == square)
            };

            match piece_type(piece) {
                KNIGHT | BISHOP => {
                    let (good_squares, bonus): (&[(u8, u8)], Score) = if piece_type(piece) == KNIGHT {
                        (&GOOD_KNIGHT_SQUARES[..], 50)
                    } else {
                        (&GOOD_BISHOP_SQUARES[..], 45)
                    };

                    if on_any(good_squares) {
                        score += bonus;
                        if pawns_attacked {
                            score += 30;
                        }
                    } else if !attacked {
                        score -= 20;
                    }
                }
                ROOK => {
                    let home = [relative_square(0, 0, color), relative_square(7, 0, color)];
                    if !home.contains(&square) && !attacked {
                        score -= 15;
                    }
                }
                _ => {}
            }
        }

        score
    })
}

/// Reward undeveloped minors that can step out to guard a hanging pawn.
pub fn minor_piece_defense(board: &Board, phase: &GamePhase) -> Score {
    if phase.off_home_square > EARLY_DEVELOPMENT_MAX {
        return 0;
    }

    both_sides(|color| {
        let needing_defense = pawns_needing_defense(board, color);
        if needing_defense.is_empty() {
            return 0;
        }

        board
            .pieces_of(color)
            .filter(|&(square, piece)| is_undeveloped_minor(square, piece))
            .flat_map(|(square, _)| board.get_pseudo_legal_moves(square))
            .filter(|&target| {
                !attacked_by_enemy(board, target, color)
                    && needing_defense.iter().any(|&pawn| covers(target, pawn))
            })
            .map(|target: Square| if is_central(target) { 50 } else { 35 })
            .sum()
    })
}
