pub mod bitboard;
pub mod board;
pub mod error;
pub mod logger;
pub mod perft;
pub mod types;

pub use board::*;
pub use error::{BoardError, BoardResult, LogError};
pub use logger::ChessLogger;
pub use perft::*;
pub use types::*;
