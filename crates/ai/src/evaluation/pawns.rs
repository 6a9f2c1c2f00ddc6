use crate::types::Score;
use engine::{
    is_empty, opposite_color, pawn_direction, piece_type, Board, Piece, Square, BISHOP, KNIGHT, PAWN, QUEEN, ROOK,
};

use super::center::CENTER_SQUARES;
use super::{
    attacked_by_enemy, both_sides, covers, has_piece, is_central, is_undeveloped_minor, pawns_needing_defense,
    relative_square, GamePhase, EARLY_DEVELOPMENT_MAX, FULL_BOARD_PIECES, OPENING_DEVELOPED_LIMIT,
};

/// Penalise pawns that have spent a second tempo in the opening.
pub fn pawn_double_moves(board: &Board, phase: &GamePhase) -> Score {
    if phase.piece_count < FULL_BOARD_PIECES {
        return 0;
    }

    both_sides(|color| {
        let dir = pawn_direction(color);
        let mut score = 0;

        for file in 0..8 {
            // Most backward pawn on the file
            let Some((square, rank)) = (0..8)
                .map(|rank| (relative_square(file, rank, color), rank))
                .find(|&(square, _)| has_piece(board, square, PAWN, color))
            else {
                continue;
            };

            if rank <= 3 || attacked_by_enemy(board, square, color) {
                continue;
            }

            score -= 20;
            if file == 3 || file == 4 {
                score -= 10;
            }

            let controls_center = [-1, 1]
                .iter()
                .filter_map(|&df| square.offset(df, dir))
                .any(|target| CENTER_SQUARES.contains(&target));
            if !controls_center && (2..=5).contains(&file) {
                score -= 10;
            }
        }

        score
    })
}

/// Hanging pawns cost 120 each, softened by pieces that can come to their aid
/// and by attackers that are themselves en prise.
pub fn undefended_pawns(board: &Board, phase: &GamePhase) -> Score {
    if phase.off_home_square > EARLY_DEVELOPMENT_MAX {
        return 0;
    }

    both_sides(|color| {
        let enemy = opposite_color(color);

        pawns_needing_defense(board, color)
            .into_iter()
            .map(|pawn| {
                let capturable_attackers = board
                    .pieces_of(enemy)
                    .filter(|&(square, _)| board.get_pseudo_legal_moves(square).contains(&pawn))
                    .filter(|&(square, _)| board.is_under_threat(square, color))
                    .count() as Score;

                -120 + potential_defenders(board, pawn, color) + 100 * capturable_attackers
            })
            .sum()
    })
}

/// For every own non-pawn piece, the value of its first safe move that would
/// cover `pawn`.
fn potential_defenders(board: &Board, pawn: Square, color: u8) -> Score {
    board
        .pieces_of(color)
        .filter(|&(_, piece)| piece_type(piece) != PAWN)
        .filter_map(|(square, piece)| {
            // Scan targets from our own back rank outwards so both colors see them in the same order
            let mut targets = board.get_pseudo_legal_moves(square);
            targets.sort_by_key(|&target| relative_square(target.file(), target.rank(), color));
            targets
                .into_iter()
                .find(|&target| covers(target, pawn) && !attacked_by_enemy(board, target, color))
                .map(|target| defender_value(square, piece, target))
        })
        .sum()
}

fn defender_value(from: Square, piece: Piece, target: Square) -> Score {
    let mut value = match piece_type(piece) {
        KNIGHT => 70,
        BISHOP => 65,
        ROOK => 30,
        QUEEN => 10,
        _ => 0,
    };
    if is_undeveloped_minor(from, piece) {
        value += 40;
    }
    if is_central(target) {
        value += 25;
    }
    value
}

/// Opening f-pawn pushes weaken the king's diagonal.
pub fn early_f_pawn(board: &Board, phase: &GamePhase) -> Score {
    if phase.off_back_rank >= OPENING_DEVELOPED_LIMIT {
        return 0;
    }

    both_sides(|color| {
        if !is_empty(board.get_piece(relative_square(5, 1, color))) {
            return 0;
        }

        let mut score = 0;
        if has_piece(board, relative_square(5, 2, color), PAWN, color) {
            score -= 30;
        }
        if has_piece(board, relative_square(5, 3, color), PAWN, color) {
            score -= 60;
        }
        score
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_phase(fen: &str, term: fn(&Board, &GamePhase) -> Score) -> Score {
        let board = Board::from_fen(fen).unwrap();
        term(&board, &GamePhase::from_board(&board))
    }

    #[test]
    fn test_start_position_terms_are_zero() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(with_phase(start, pawn_double_moves), 0);
        assert_eq!(with_phase(start, undefended_pawns), 0);
        assert_eq!(with_phase(start, early_f_pawn), 0);
    }

    #[test]
    fn test_centre_pawn_pushed_twice() {
        // From e5 the pawn only hits d6 and f6
        let score = with_phase("rnbqkbnr/pppppppp/8/4P3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1", pawn_double_moves);
        assert_eq!(score, -40);
    }

    #[test]
    fn test_double_moves_skip_thinned_boards() {
        assert_eq!(with_phase("4k3/8/8/4P3/8/8/8/4K3 w - - 0 1", pawn_double_moves), 0);
    }

    #[test]
    fn test_black_pawn_pushed_twice() {
        let score = with_phase("rnbqkbnr/pppp1ppp/8/8/4p3/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", pawn_double_moves);
        assert_eq!(score, 40);
    }

    #[test]
    fn test_hanging_pawn_without_help() {
        assert_eq!(with_phase("4k3/8/5n2/8/4P3/8/8/4K3 w - - 0 1", undefended_pawns), -120);
    }

    #[test]
    fn test_hanging_pawn_with_knight_nearby() {
        // Ng1-f3 is worth 70, +40 from home, +25 for the central square
        assert_eq!(with_phase("4k3/8/5n2/8/4P3/8/8/4K1N1 w - - 0 1", undefended_pawns), -120 + 135);
    }

    #[test]
    fn test_attacker_that_can_be_taken() {
        // Nf6 hits e4 but the g5 pawn can capture it
        assert_eq!(with_phase("4k3/8/5n2/6P1/4P3/8/8/4K3 w - - 0 1", undefended_pawns), -120 + 100);
    }

    #[test]
    fn test_defender_squares_are_scanned_from_own_side() {
        // g5 hangs and its defenders have several covering squares of mixed centrality
        let position = "rnb1kb1r/ppqp1p1p/2p1p2n/6p1/P2P1P2/1P5N/2P1PKPP/RNB1QB1R w kq - 1 9";
        let mirrored = "rnb1qb1r/2p1pkpp/1p5n/p2p1p2/6P1/2P1P2N/PPQP1P1P/RNB1KB1R b KQ - 1 9";
        assert_eq!(with_phase(mirrored, undefended_pawns), -with_phase(position, undefended_pawns));
    }

    #[test]
    fn test_f_pawn_pushes() {
        assert_eq!(with_phase("rnbqkbnr/pppppppp/8/8/8/5P2/PPPPP1PP/RNBQKBNR b KQkq - 0 1", early_f_pawn), -30);
        assert_eq!(with_phase("rnbqkbnr/pppppppp/8/8/5P2/8/PPPPP1PP/RNBQKBNR b KQkq - 0 1", early_f_pawn), -60);
        assert_eq!(with_phase("rnbqkbnr/ppppp1pp/5p2/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", early_f_pawn), 30);
    }
}
