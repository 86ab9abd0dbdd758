//! Error types for boolean-vector solutions.
//!
//! Only reportable conditions live here. Caller misuse such as an invalid
//! `k` or mismatched crossover parents is a contract violation and panics
//! at the point of occurrence.

use thiserror::Error;

/// Errors reported by solution construction, validation, and runners.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolutionError {
    /// A solution vector must hold at least one position.
    #[error("invalid solution length: vectors must not be empty")]
    InvalidLength,

    /// Two solutions that must share a length do not.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the receiving solution.
        expected: usize,
        /// Length of the other solution.
        actual: usize,
    },

    /// The solution failed structural or problem-specific validation.
    #[error("invalid solution state: {0}")]
    InvalidState(String),

    /// A runner configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for fallible solution operations.
pub type Result<T> = std::result::Result<T, SolutionError>;
