use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid FEN: {reason}")]
    InvalidFen { reason: String },

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),
}

impl BoardError {
    pub(crate) fn fen(reason: impl Into<String>) -> Self {
        Self::InvalidFen { reason: reason.into() }
    }
}

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to write game log to {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
