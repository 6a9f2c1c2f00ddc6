use engine::{move_to_algebraic, Board, Move, WHITE};
use std::time::Instant;
use tracing::{debug, info, trace};

use crate::config::SearchConfig;
use crate::evaluation::Evaluator;
use crate::types::*;

/// Per-search bookkeeping. A fresh context is created for every top-level search.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext {
    /// `minimax` calls made so far.
    pub nodes: u64,
    configured_depth: u32,
}

impl SearchContext {
    pub fn new(configured_depth: u32) -> Self {
        Self {
            nodes: 0,
            configured_depth,
        }
    }

    /// Plies between the root and a node with `depth` plies remaining.
    fn plies_from_root(&self, depth: u32) -> Score {
        self.configured_depth.saturating_sub(depth) as Score
    }
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// Moves are searched in generation order on independent board copies, so a
/// search never mutates the caller's board.
pub struct SearchEngine {
    depth: u32,
    evaluator: Evaluator,
    nodes_searched: u64,
    log_evaluation: bool,
}

impl SearchEngine {
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
            evaluator: Evaluator::new(),
            nodes_searched: 0,
            log_evaluation: false,
        }
    }

    pub fn with_config(config: &SearchConfig) -> Self {
        let mut engine = Self::new(config.depth);
        engine.log_evaluation = config.log_evaluation;
        engine
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// A depth of 0 is treated as 1.
    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth.max(1);
    }

    /// Nodes visited by the most recent search.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    pub fn reset_nodes_searched(&mut self) {
        self.nodes_searched = 0;
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn get_best_move(&mut self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    /// Search every legal move of the side to move and return the best one.
    ///
    /// With no legal moves the result carries no move and a score of 0,
    /// whether the position is mate or stalemate.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        let start = Instant::now();
        let mut ctx = SearchContext::new(self.depth);
        let root_is_white = board.side_to_move() == WHITE;

        if self.log_evaluation {
            let breakdown = self.evaluator.breakdown(board);
            debug!(?breakdown, total = breakdown.total(), "root evaluation");
        }

        let moves = board.get_all_legal_moves();
        let mut best_move = moves.first().copied();
        let mut best_score = match (best_move, root_is_white) {
            (None, _) => DRAW_SCORE,
            (Some(_), true) => Score::MIN,
            (Some(_), false) => Score::MAX,
        };

        for mv in moves {
            let mut child = board.clone();
            child.make_move(mv);

            let score = self.minimax(&mut ctx, &child, self.depth - 1, Score::MIN, Score::MAX, !root_is_white);
            debug!(mv = %move_to_algebraic(mv), score, "root move");

            let improves = if root_is_white { score > best_score } else { score < best_score };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }
        }

        self.nodes_searched = ctx.nodes;
        let result = SearchResult {
            best_move,
            score: best_score,
            depth: self.depth,
            nodes_searched: ctx.nodes,
            elapsed: start.elapsed(),
        };

        info!(
            nodes = result.nodes_searched,
            elapsed_ms = result.elapsed_ms(),
            best_move = %result.best_move.map_or_else(|| "none".to_string(), move_to_algebraic),
            score = result.score,
            "search complete"
        );

        result
    }

    /// Minimax value of `board` with `depth` plies left, White maximizing.
    ///
    /// Counts exactly one node per call. Checkmate scores are shrunk by the
    /// distance from the root so that shorter mates are preferred.
    pub fn minimax(
        &self,
        ctx: &mut SearchContext,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        ctx.nodes += 1;

        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let moves = board.get_all_legal_moves();
        if moves.is_empty() {
            if !board.is_in_check() {
                return DRAW_SCORE;
            }
            let mate = MATE_SCORE - ctx.plies_from_root(depth);
            return if maximizing { -mate } else { mate };
        }

        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        for mv in moves {
            let mut child = board.clone();
            child.make_move(mv);
            let score = self.minimax(ctx, &child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                trace!(depth, alpha, beta, "cutoff");
                break;
            }
        }

        best
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}
