//! Line-oriented painting interpreter: a single 2D colored board mutated
//! by single-letter commands (`I C L V H F S X`) read one line at a time.

pub mod app;
pub mod board;
pub mod commands;
pub mod config;
pub mod error;

pub use board::Board;
pub use commands::{Command, Step};
pub use config::DEFAULT_COLOR;
pub use error::{AppError, ParseError};
