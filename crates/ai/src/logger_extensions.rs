use engine::{move_to_algebraic, ChessLogger};

use crate::evaluation::EvalBreakdown;
use crate::types::SearchResult;

/// Search and evaluation reports rendered into the game log.
pub trait AILoggerExtensions {
    fn log_search_result(&mut self, result: &SearchResult);
    /// Only written while advanced logging is enabled.
    fn log_evaluation_breakdown(&mut self, breakdown: &EvalBreakdown);
}

impl AILoggerExtensions for ChessLogger {
    fn log_search_result(&mut self, result: &SearchResult) {
        let best = result
            .best_move
            .map_or_else(|| "none".to_string(), move_to_algebraic);

        ChessLogger::log_with_indent(
            self,
            &format!(
                "🔍 Search depth {} | best {} | score {:+} | {} nodes in {}ms",
                result.depth,
                best,
                result.score,
                result.nodes_searched,
                result.elapsed_ms()
            ),
        );
    }

    fn log_evaluation_breakdown(&mut self, breakdown: &EvalBreakdown) {
        if !ChessLogger::should_log_advanced(self) {
            return;
        }

        let phase = breakdown.phase;
        ChessLogger::log_with_indent(
            self,
            &format!(
                "📊 EVALUATION (off back rank {}, off home {}, {} pieces):",
                phase.off_back_rank, phase.off_home_square, phase.piece_count
            ),
        );
        ChessLogger::increase_indent(self);
        for (name, score) in breakdown.terms() {
            ChessLogger::log_with_indent(self, &format!("├─ {:<20} {:+}", name, score));
        }
        ChessLogger::log_with_indent(self, &format!("└─ {:<20} {:+}", "total", breakdown.total()));
        ChessLogger::decrease_indent(self);
    }
}
