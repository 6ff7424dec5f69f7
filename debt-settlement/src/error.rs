//! Error types for debt settlement

use thiserror::Error;

/// Result type for settlement operations
pub type Result<T> = std::result::Result<T, Error>;

/// Settlement errors
#[derive(Error, Debug)]
pub enum Error {
    /// Debt core error
    #[error("Debt core error: {0}")]
    Core(#[from] debt_core::Error),

    /// Name missing from the alias mapping
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    /// Debt record with an unusable amount
    #[error("Invalid amount in debt record {index}: {reason}")]
    InvalidAmount {
        /// Position of the record in the debt list
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Malformed input document
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Rendering error
    #[error("Render error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
