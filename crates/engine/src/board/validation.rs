use super::Board;
use crate::bitboard::{get_king_attacks, get_knight_attacks, iterate_bits, index_to_square};
use crate::types::*;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Check if a square is attacked by any piece of `by_color`.
    ///
    /// The square's own occupant is ignored, so this answers both "is this
    /// piece attacked" and "is this piece defended" (pass its own color).
    pub fn is_under_threat(&self, square: Square, by_color: u8) -> bool {
        self.check_sliding_threats(square, by_color)
            || self.check_knight_threats(square, by_color)
            || self.check_pawn_threats(square, by_color)
            || self.check_king_threats(square, by_color)
    }

    fn check_sliding_threats(&self, square: Square, by_color: u8) -> bool {
        let hits = |directions: &[(i8, i8)], slider: u8| {
            directions.iter().any(|&(df, dr)| {
                self.cast_ray(square, df, dr).is_some_and(|(_, piece)| {
                    piece_color(piece) == by_color
                        && (piece_type(piece) == slider || piece_type(piece) == QUEEN)
                })
            })
        };

        hits(&ROOK_DIRECTIONS, ROOK) || hits(&BISHOP_DIRECTIONS, BISHOP)
    }

    /// Walk from `start` (exclusive) in one direction and return the first
    /// occupied square with its piece.
    pub fn cast_ray(&self, start: Square, df: i8, dr: i8) -> Option<(Square, Piece)> {
        let mut current = start;
        while let Some(next) = current.offset(df, dr) {
            let piece = self.get_piece(next);
            if !is_empty(piece) {
                return Some((next, piece));
            }
            current = next;
        }
        None
    }

    fn check_knight_threats(&self, square: Square, by_color: u8) -> bool {
        let knight = make_piece(KNIGHT, by_color);
        iterate_bits(get_knight_attacks(square.0))
            .any(|index| self.get_piece(index_to_square(index)) == knight)
    }

    fn check_pawn_threats(&self, square: Square, by_color: u8) -> bool {
        // Pawns attack forward, so look backwards from the target
        let attack_direction = -pawn_direction(by_color);
        let pawn = make_piece(PAWN, by_color);

        [-1, 1].iter().any(|&df| {
            square
                .offset(df, attack_direction)
                .is_some_and(|from| self.get_piece(from) == pawn)
        })
    }

    fn check_king_threats(&self, square: Square, by_color: u8) -> bool {
        let king = make_piece(KING, by_color);
        iterate_bits(get_king_attacks(square.0))
            .any(|index| self.get_piece(index_to_square(index)) == king)
    }

    pub fn find_king(&self, color: u8) -> Option<Square> {
        let king = make_piece(KING, color);
        Square::all().find(|&square| self.get_piece(square) == king)
    }

    /// True when the king of `color` is attacked. A side without a king is never in check.
    pub fn is_king_attacked(&self, color: u8) -> bool {
        self.find_king(color)
            .is_some_and(|king_square| self.is_under_threat(king_square, opposite_color(color)))
    }

    /// True when the side to move is in check.
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.current_turn)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.get_all_legal_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.get_all_legal_moves().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        crate::board::parse_square(name).unwrap()
    }

    #[test]
    fn test_sliding_threats_stop_at_blockers() {
        let board = Board::from_fen("4k3/8/8/8/r2P3K/8/8/8 w - - 0 1").unwrap();
        assert!(board.is_under_threat(sq("b4"), BLACK));
        assert!(board.is_under_threat(sq("d4"), BLACK));
        assert!(!board.is_under_threat(sq("e4"), BLACK));
        assert!(!board.is_in_check());
    }

    #[test]
    fn test_pawn_threats_follow_color() {
        let board = Board::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(board.is_under_threat(sq("c4"), BLACK));
        assert!(board.is_under_threat(sq("e4"), BLACK));
        assert!(!board.is_under_threat(sq("c6"), BLACK));
        assert!(!board.is_under_threat(sq("d4"), BLACK));
    }

    #[test]
    fn test_defended_piece_is_threatened_by_its_own_side() {
        // The e4 pawn is covered by the d3 pawn
        let board = Board::from_fen("4k3/8/8/8/4P3/3P4/8/4K3 w - - 0 1").unwrap();
        assert!(board.is_under_threat(sq("e4"), WHITE));
        assert!(!board.is_under_threat(sq("d3"), WHITE));
    }

    #[test]
    fn test_knight_and_king_threats() {
        let board = Board::from_fen("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1").unwrap();
        assert!(board.is_in_check());
        assert!(board.is_under_threat(sq("d7"), BLACK));
        assert_eq!(board.find_king(WHITE), Some(sq("e1")));
    }

    #[test]
    fn test_checkmate_and_stalemate_detection() {
        let mate = Board::from_fen("R5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 1 1").unwrap();
        assert!(mate.is_checkmate());
        let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(stalemate.is_stalemate());
        assert!(!stalemate.is_checkmate());
    }
}
