use crate::error::LogError;
use crate::{move_to_algebraic, Move};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// In-memory game log. Lines accumulate in `log_buffer` and are written out
/// in one go by [`ChessLogger::save_to_file`].
#[derive(Debug)]
pub struct ChessLogger {
    pub log_buffer: String,
    pub advanced_logging: bool,
    game_start_time: Instant,
    move_count: u32,
    indent_level: usize,
}

impl ChessLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            advanced_logging: false,
            game_start_time: Instant::now(),
            move_count: 0,
            indent_level: 0,
        };

        logger.log("=== Chess Engine Game Log Started ===");
        logger.log(&format!("Date: {}", chrono::Local::now().format("%m/%d/%Y %H:%M:%S")));
        logger
    }

    pub fn should_log_advanced(&self) -> bool {
        self.advanced_logging
    }

    pub fn enable_advanced_logging(&mut self) {
        self.advanced_logging = true;
        self.log("Advanced logging enabled");
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_with_indent(&mut self, message: &str) {
        let indent = "  ".repeat(self.indent_level);
        self.log_buffer.push_str(&indent);
        self.log(message);
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn log_engine_move(&mut self, mv: Move, time_ms: u64, score: i32) {
        self.move_count += 1;
        self.log(&format!(
            "{}. {} (engine, {}ms) score {:+}",
            self.move_count,
            move_to_algebraic(mv),
            time_ms,
            score
        ));
    }

    /// Append a closing line and write the buffer to
    /// `<dir>/<month>_<day>_<year>_<h>_<m>_<s>.txt`, creating `dir` if needed.
    pub fn save_to_file(&mut self, dir: &Path, reason: &str) -> Result<PathBuf, LogError> {
        fs::create_dir_all(dir).map_err(|source| LogError::Io { path: dir.to_path_buf(), source })?;

        let now = chrono::Local::now();
        let path = dir.join(format!("{}.txt", now.format("%m_%d_%Y_%H_%M_%S")));

        let elapsed = self.game_start_time.elapsed().as_secs();
        self.log(&format!("Game ended: {} after {}s - saving log", reason, elapsed));

        fs::write(&path, self.log_buffer.as_bytes()).map_err(|source| LogError::Io { path: path.clone(), source })?;
        Ok(path)
    }
}

impl Default for ChessLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_header_and_indentation() {
        let mut logger = ChessLogger::new();
        assert!(logger.log_buffer.starts_with("=== Chess Engine Game Log Started ===\nDate: "));

        logger.increase_indent();
        logger.log_with_indent("nested");
        logger.decrease_indent();
        logger.decrease_indent();
        logger.log_with_indent("flat");
        assert!(logger.log_buffer.ends_with("  nested\nflat\n"));
    }

    #[test]
    fn test_moves_are_numbered() {
        let mut logger = ChessLogger::new();
        logger.log_engine_move(Move::new(Square::new(4, 1), Square::new(4, 3)), 10, 0);
        logger.log_engine_move(Move::new(Square::new(4, 6), Square::new(4, 4)), 25, -12);
        assert_eq!(logger.move_count(), 2);
        assert!(logger.log_buffer.contains("1. e2e4 (engine, 10ms) score +0"));
        assert!(logger.log_buffer.contains("2. e7e5 (engine, 25ms) score -12"));
    }

    #[test]
    fn test_save_to_file_writes_buffer() {
        let dir = std::env::temp_dir().join(format!("engine-log-test-{}", std::process::id()));
        let mut logger = ChessLogger::new();
        logger.log("last line");

        let path = logger.save_to_file(&dir, "test").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("last line"));
        assert!(written.contains("Game ended: test"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
