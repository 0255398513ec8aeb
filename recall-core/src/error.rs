//! Error types for the recall core library.
//!
//! Gameplay computations never fail; these errors only surface from
//! configuration loading and strict mode parsing.

use thiserror::Error;

/// Top-level error type for fallible recall operations.
#[derive(Error, Debug)]
pub enum RecallError {
    /// Configuration could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generation mode name was not recognised by strict parsing.
    #[error("Unknown generation mode: {0:?} (expected random, primes, fibonacci or mirror)")]
    UnknownMode(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, RecallError>;
