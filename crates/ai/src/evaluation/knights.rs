use crate::types::Score;
use engine::{is_empty, make_piece, opposite_color, pawn_direction, piece_type, Board, Square, KNIGHT, PAWN};

use super::both_sides;

/// Centralization bonus plus penalties for knights an enemy pawn can hit.
pub fn knight_placement(board: &Board) -> Score {
    both_sides(|color| {
        board
            .pieces_of(color)
            .filter(|&(_, piece)| piece_type(piece) == KNIGHT)
            .map(|(square, _)| centralization(square) - pawn_harassment(board, square, color))
            .sum()
    })
}

/// Up to 3 points for Manhattan closeness to the d4-e5 block.
fn centralization(square: Square) -> Score {
    let distance = |value: u8| (value as i32 - 3).abs().min((value as i32 - 4).abs());
    (3 - (distance(square.file()) + distance(square.rank()))).max(0)
}

fn pawn_harassment(board: &Board, knight: Square, color: u8) -> Score {
    let enemy = opposite_color(color);
    let enemy_pawn = make_piece(PAWN, enemy);
    // Enemy pawns move towards the knight's side, so "behind" is against their direction
    let dir = pawn_direction(enemy);
    let mut penalty = 0;

    for df in [-1, 1] {
        let attack_square = knight.offset(df, -dir);

        // A pawn one push away from attacking, onto a square we don't cover
        if let (Some(pawn_square), Some(push_square)) = (knight.offset(df, -2 * dir), attack_square) {
            if board.get_piece(pawn_square) == enemy_pawn
                && is_empty(board.get_piece(push_square))
                && !board.is_under_threat(push_square, color)
            {
                penalty += 15;
            }
        }

        // Already attacking
        if attack_square.is_some_and(|square| board.get_piece(square) == enemy_pawn) {
            penalty += 25;
        }
    }

    for df in [-1, 1] {
        if let (Some(pawn_square), Some(push_square)) = (knight.offset(df, 0), knight.offset(df, dir)) {
            if board.get_piece(pawn_square) == enemy_pawn && is_empty(board.get_piece(push_square)) {
                penalty += 20;
            }
        }
    }

    penalty
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knights(fen: &str) -> Score {
        knight_placement(&Board::from_fen(fen).unwrap())
    }

    #[test]
    fn test_centralization_bonus() {
        assert_eq!(centralization(Square::new(3, 3)), 3);
        assert_eq!(centralization(Square::new(2, 2)), 1);
        assert_eq!(centralization(Square::new(0, 0)), 0);
        assert_eq!(knights("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1"), 3);
    }

    #[test]
    fn test_pawn_two_steps_away_can_push_and_attack() {
        // c6 pawn can play c5 hitting d4
        assert_eq!(knights("4k3/8/2p5/8/3N4/8/8/4K3 w - - 0 1"), 3 - 15);
    }

    #[test]
    fn test_pawn_already_attacking() {
        assert_eq!(knights("4k3/8/8/2p5/3N4/8/8/4K3 w - - 0 1"), 3 - 25);
    }

    #[test]
    fn test_covered_push_square_is_not_penalised() {
        // The b4 pawn covers c5, so the c6 pawn pushing there is not a threat
        assert_eq!(knights("4k3/8/2p5/8/1P1N4/8/8/4K3 w - - 0 1"), 3);
    }

    #[test]
    fn test_mirrored_knights_cancel() {
        assert_eq!(knights("4k3/8/2p5/3n4/3N4/2P5/8/4K3 w - - 0 1"), 0);
    }
}
