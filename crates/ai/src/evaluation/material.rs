use crate::types::Score;
use engine::{piece_value, Board};

use super::both_sides;

/// Sum of piece values, White minus Black.
pub fn material(board: &Board) -> Score {
    both_sides(|color| board.pieces_of(color).map(|(_, piece)| piece_value(piece)).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        assert_eq!(material(&Board::new()), 0);
    }

    #[test]
    fn test_extra_rook_for_black() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/4K2R w - - 0 1").unwrap();
        assert_eq!(material(&board), -500);
    }
}
