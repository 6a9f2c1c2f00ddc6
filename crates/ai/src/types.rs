use engine::Move;
use std::time::Duration;

/// Centipawn-style score. Positive favors White.
pub type Score = i32;

/// Base magnitude of a forced mate; reduced by one per ply from the root.
pub const MATE_SCORE: Score = 20000;
pub const DRAW_SCORE: Score = 0;

/// Maximum search depth accepted by configuration.
pub const MAX_DEPTH: u32 = 8;
pub const DEFAULT_DEPTH: u32 = 2;

/// Outcome of one top-level search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal moves.
    pub best_move: Option<Move>,
    pub score: Score,
    pub depth: u32,
    pub nodes_searched: u64,
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}
