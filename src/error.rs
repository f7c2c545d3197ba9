//! Error types for the app verifier.
//!
//! Classification outcomes are never errors; they are values of
//! `VerificationStatus` and `InternalDatabaseStatus`. The variants here cover
//! loading the curated database and internal invariant violations.

use thiserror::Error;

/// Main error type for verifier operations.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// Normalized verification text did not have a line the matcher had to read.
    #[error("Verification info is missing line {index} (has {line_count} lines)")]
    MissingLine { index: usize, line_count: usize },

    /// A digest that is not a canonical colon-separated uppercase fingerprint
    #[error("Invalid signing certificate digest for {package_name}: {digest}")]
    InvalidDigest {
        package_name: String,
        digest: String,
    },

    /// Structurally invalid curated database
    #[error("Invalid internal database: {0}")]
    InvalidDatabase(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for verifier operations
pub type Result<T> = std::result::Result<T, VerifierError>;
