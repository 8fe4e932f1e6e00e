//! Error types for the memories domain layer.

use thiserror::Error;

/// Top-level error type for domain-level validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoriesError {
    /// A date field did not contain a calendar-valid `YYYY-MM-DD` value.
    #[error("Invalid date: {input:?}, expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input, verbatim.
        input: String,
    },

    /// A person's name was empty or only whitespace.
    #[error("Name was empty")]
    EmptyName,
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, MemoriesError>;
