use crate::{move_to_algebraic, Board, BoardResult, Move};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct PerftTestCase {
    pub name: &'static str,
    pub fen: &'static str,
    pub expected_results: &'static [(u32, u64)], // (depth, expected_nodes)
}

// Standard perft test positions
pub const PERFT_POSITIONS: &[PerftTestCase] = &[
    PerftTestCase {
        name: "Starting Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        expected_results: &[(1, 20), (2, 400), (3, 8_902), (4, 197_281), (5, 4_865_609)],
    },
    PerftTestCase {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_results: &[(1, 48), (2, 2_039), (3, 97_862), (4, 4_085_603)],
    },
    PerftTestCase {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_results: &[(1, 14), (2, 191), (3, 2_812), (4, 43_238), (5, 674_624)],
    },
    PerftTestCase {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        expected_results: &[(1, 6), (2, 264), (3, 9_467), (4, 422_333)],
    },
    PerftTestCase {
        name: "Position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        expected_results: &[(1, 44), (2, 1_486), (3, 62_379), (4, 2_103_487)],
    },
    PerftTestCase {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        expected_results: &[(1, 46), (2, 2_079), (3, 89_890), (4, 3_894_594)],
    },
];

/// Count leaf nodes of the legal move tree to `depth`.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.get_all_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut next = board.clone();
            next.make_move(mv);
            perft(&next, depth - 1)
        })
        .sum()
}

/// Divide perft - per root move node counts, in generation order.
pub fn perft_divide(board: &Board, depth: u32) -> Vec<(Move, u64)> {
    board
        .get_all_legal_moves()
        .into_iter()
        .map(|mv| {
            let mut next = board.clone();
            next.make_move(mv);
            let nodes = if depth > 1 { perft(&next, depth - 1) } else { 1 };
            (mv, nodes)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct PerftOutcome {
    pub name: &'static str,
    pub depth: u32,
    pub expected: u64,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl PerftOutcome {
    pub fn passed(&self) -> bool {
        self.nodes == self.expected
    }
}

/// Run every depth of a reference position up to `max_depth`, stopping at
/// the first mismatch. A mismatch logs the divide breakdown.
pub fn run_position_tests(test_case: &PerftTestCase, max_depth: u32) -> BoardResult<Vec<PerftOutcome>> {
    let board = Board::from_fen(test_case.fen)?;
    let mut outcomes = Vec::new();

    for &(depth, expected) in test_case.expected_results {
        if depth > max_depth {
            break;
        }

        let start_time = Instant::now();
        let nodes = perft(&board, depth);
        let outcome = PerftOutcome {
            name: test_case.name,
            depth,
            expected,
            nodes,
            elapsed: start_time.elapsed(),
        };

        if outcome.passed() {
            info!(position = test_case.name, depth, nodes, elapsed_ms = outcome.elapsed.as_millis() as u64, "perft passed");
            outcomes.push(outcome);
        } else {
            warn!(position = test_case.name, depth, nodes, expected, "perft mismatch");
            for (mv, count) in perft_divide(&board, depth) {
                debug!(mv = %move_to_algebraic(mv), nodes = count, "divide");
            }
            outcomes.push(outcome);
            break;
        }
    }

    Ok(outcomes)
}
