//! Error types for the debt core

use thiserror::Error;

/// Result type for debt core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Debt core errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Negative, non-finite or non-numeric amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Invariant violation (net-position preservation, mirror index, etc.)
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
