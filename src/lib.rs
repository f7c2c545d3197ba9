//! App signing certificate verification.
//!
//! Verifies that an installed app is signed by the expected certificate,
//! using either pasted verification text (package name plus signature
//! hashes) or the curated internal database of known-good apps.
//!
//! ```
//! use appverifier::core::VerificationStatus;
//! use appverifier::hashing::extract_hashes;
//! use appverifier::matcher::classify;
//! use appverifier::text::normalize;
//!
//! let hashes = extract_hashes([b"certificate".as_slice()], false);
//! let pasted = format!("com.example {}", hashes.digests[0]);
//! let status = classify(&normalize(&pasted), &hashes, "com.example").unwrap();
//! assert_eq!(status, VerificationStatus::Match);
//! ```

/// Core data types module
pub mod core;

pub mod config;
pub mod database;
pub mod error;
pub mod hashing;
pub mod logging;
pub mod matcher;
pub mod resolver;
pub mod text;
pub mod verifier;

pub use crate::core::{
    Hashes, InternalDatabaseStatus, InternalVerificationInfo, VerificationInfo,
    VerificationStatus, VerifyAppUiState,
};
pub use crate::database::InternalDatabase;
pub use crate::error::{Result, VerifierError};
pub use crate::verifier::AppVerifier;
