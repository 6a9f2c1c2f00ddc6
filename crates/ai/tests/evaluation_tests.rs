mod common;

use ai::evaluation::material;
use ai::Evaluator;
use common::positions::*;
use common::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn test_start_position_is_level() {
    assert_eq!(Evaluator::new().evaluate(&board_from_fen(STARTING)), 0);
}

#[test]
fn test_evaluation_is_pure() {
    let evaluator = Evaluator::new();
    let board = board_from_fen(ITALIAN);
    let before = board.clone();

    let first = evaluator.evaluate(&board);
    assert_eq!(evaluator.evaluate(&board), first);
    assert_eq!(board, before);
}

#[test]
fn test_mirrored_positions_negate() {
    let evaluator = Evaluator::new();

    for fen in [
        STARTING,
        KNIGHTS_OUT,
        ROOK_ENDING,
        "rnbqkbnr/pppppppp/8/4P3/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1",
        "5rk1/8/8/2b5/8/5P2/6PP/6K1 w - - 0 1",
    ] {
        let board = board_from_fen(fen);
        let mirrored = mirror(&board);
        assert_eq!(evaluator.evaluate(&mirrored), -evaluator.evaluate(&board), "{}", fen);
        assert_eq!(evaluator.breakdown(&mirrored).phase, evaluator.breakdown(&board).phase, "{}", fen);
    }
}

#[test]
fn test_random_games_stay_mirror_symmetric() {
    let evaluator = Evaluator::new();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..40 {
        let mut board = board_from_fen(STARTING);
        for _ in 0..40 {
            let moves = board.get_all_legal_moves();
            if moves.is_empty() {
                break;
            }
            board.make_move(moves[rng.random_range(0..moves.len())]);

            let mirrored = mirror(&board);
            assert_eq!(evaluator.evaluate(&mirrored), -evaluator.evaluate(&board), "{}", board.to_fen());
        }
    }
}

#[test]
fn test_material_flips_with_colors() {
    for fen in [STARTING, ITALIAN, "r3k2r/8/8/8/8/8/8/4K2R w - - 0 1", "4k3/8/8/8/8/8/PPPP4/RNBQK3 w - - 0 1"] {
        let board = board_from_fen(fen);
        assert_eq!(material(&mirror(&board)), -material(&board), "{}", fen);
    }
}

#[test]
fn test_breakdown_adds_up() {
    let evaluator = Evaluator::new();
    for fen in [STARTING, ITALIAN, KNIGHTS_OUT, ROOK_ENDING, BACK_RANK_MATE_WHITE] {
        let board = board_from_fen(fen);
        let breakdown = evaluator.breakdown(&board);
        let sum: i32 = breakdown.terms().iter().map(|(_, score)| score).sum();
        assert_eq!(sum, breakdown.total());
        assert_eq!(breakdown.total(), evaluator.evaluate(&board));
    }
}

#[test]
fn test_early_f_pawn_push_shows_in_breakdown() {
    let board = board_from_fen("rnbqkbnr/pppppppp/8/8/8/5P2/PPPPP1PP/RNBQKBNR b KQkq - 0 1");
    let breakdown = Evaluator::new().breakdown(&board);
    assert_eq!(breakdown.early_f_pawn, -30);
    assert_eq!(breakdown.material, 0);
}

#[test]
fn test_queen_sortie_costs_the_mover() {
    let board = board_from_fen("rnbqkbnr/pppp1ppp/8/4p2Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    assert_eq!(Evaluator::new().breakdown(&board).early_queen, -31);
}
