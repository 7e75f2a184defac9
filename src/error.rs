use thiserror::Error;

/// Why a command line was rejected. These never reach stdout: the
/// dispatcher logs the reason and substitutes a no-op so the loop keeps
/// reading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("expected {expected} arguments, got {got}")]
    ArgCount { expected: usize, got: usize },
    #[error("not an integer: {0:?}")]
    InvalidInteger(String),
    #[error("coordinate must be positive, got {0}")]
    NonPositive(i64),
}

/// Failures the interpreter loop cannot recover from locally.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("input/output failure")]
    Io(#[from] std::io::Error),
}
