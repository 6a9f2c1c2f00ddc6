//! Shared helpers for the search and evaluation integration tests.
#![allow(dead_code)]

use ai::{Evaluator, Score, MATE_SCORE};
use engine::*;

pub fn board_from_fen(fen: &str) -> Board {
    match Board::from_fen(fen) {
        Ok(board) => board,
        Err(err) => panic!("bad test FEN {}: {}", fen, err),
    }
}

/// Flip ranks, swap colors and hand the move to the other side.
pub fn mirror(board: &Board) -> Board {
    let mut mirrored = Board::empty();
    for (square, piece) in board.occupied_squares() {
        let swapped = make_piece(piece_type(piece), opposite_color(piece_color(piece)));
        mirrored.set_piece(square.flip_rank(), swapped);
    }

    mirrored.current_turn = opposite_color(board.current_turn);
    let rights = board.castling_rights;
    mirrored.castling_rights = ((rights & 0b0011) << 2) | ((rights & 0b1100) >> 2);
    mirrored.en_passant_target = board.en_passant_target.map(|square| square.flip_rank());
    mirrored.half_move_clock = board.half_move_clock;
    mirrored.full_move_number = board.full_move_number;
    mirrored
}

/// Full-window minimax without pruning, scored the same way as the engine.
pub fn plain_minimax(evaluator: &Evaluator, board: &Board, depth: u32, configured_depth: u32, maximizing: bool) -> Score {
    if depth == 0 {
        return evaluator.evaluate(board);
    }

    let moves = board.get_all_legal_moves();
    if moves.is_empty() {
        if !board.is_in_check() {
            return 0;
        }
        let mate = MATE_SCORE - (configured_depth - depth) as Score;
        return if maximizing { -mate } else { mate };
    }

    let scores = moves.into_iter().map(|mv| {
        let mut child = board.clone();
        child.make_move(mv);
        plain_minimax(evaluator, &child, depth - 1, configured_depth, !maximizing)
    });

    if maximizing {
        scores.max().unwrap_or(Score::MIN)
    } else {
        scores.min().unwrap_or(Score::MAX)
    }
}

/// Root decision of [`plain_minimax`]: first move with the best score.
pub fn plain_root(evaluator: &Evaluator, board: &Board, depth: u32) -> (Option<Move>, Score) {
    let white = board.side_to_move() == WHITE;
    let mut best: Option<(Move, Score)> = None;

    for mv in board.get_all_legal_moves() {
        let mut child = board.clone();
        child.make_move(mv);
        let score = plain_minimax(evaluator, &child, depth - 1, depth, !white);

        let better = match best {
            None => true,
            Some((_, best_score)) => if white { score > best_score } else { score < best_score },
        };
        if better {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, 0),
    }
}

pub mod positions {
    pub const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    pub const ITALIAN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 4 4";
    pub const KNIGHTS_OUT: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    pub const BACK_RANK_MATE_WHITE: &str = "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1"; // Ra8#
    pub const BACK_RANK_MATE_BLACK: &str = "r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1"; // Ra1#
    pub const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";
    pub const ROOK_ENDING: &str = "8/8/4k3/8/2R5/4K3/8/8 w - - 0 1";
}
