//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for the core (bot transport, category parsing).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type for core operations; uses [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
