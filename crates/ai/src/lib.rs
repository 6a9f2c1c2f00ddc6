pub mod config;
pub mod error;
pub mod evaluation;
pub mod logger_extensions;
pub mod search;
pub mod types;

pub use config::SearchConfig;
pub use error::{ConfigError, ConfigResult};
pub use evaluation::{EvalBreakdown, Evaluator, GamePhase};
pub use logger_extensions::AILoggerExtensions;
pub use search::*;
pub use types::*;
