//! Verification outcome taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of comparing user-supplied verification text with the loaded app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Package name and signature hash both match
    Match,
    /// Neither package name nor signature hash match
    #[serde(rename = "NOMATCH")]
    NoMatch,
    /// Package name matches, signature hash does not
    #[serde(rename = "PKG_MATCH_BUT_SIG_HASH_NOMATCH")]
    PkgMatchButSigHashNoMatch,
    /// Signature hash matches under a different package name
    #[serde(rename = "PKG_NOMATCH_BUT_SIG_HASH_MATCH")]
    PkgNoMatchButSigHashMatch,
    /// Only a hash was supplied and it matches
    PkgNotGivenButSigHashMatch,
    /// Only a digest-shaped hash was supplied and it does not match
    #[serde(rename = "PKG_NOT_GIVEN_AND_SIG_HASH_NOMATCH")]
    PkgNotGivenAndSigHashNoMatch,
}

impl VerificationStatus {
    /// True only for the outcomes where the supplied hash matched.
    pub fn is_hash_match(self) -> bool {
        matches!(
            self,
            VerificationStatus::Match
                | VerificationStatus::PkgNoMatchButSigHashMatch
                | VerificationStatus::PkgNotGivenButSigHashMatch
        )
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VerificationStatus::Match => "MATCH",
            VerificationStatus::NoMatch => "NOMATCH",
            VerificationStatus::PkgMatchButSigHashNoMatch => "PKG_MATCH_BUT_SIG_HASH_NOMATCH",
            VerificationStatus::PkgNoMatchButSigHashMatch => "PKG_NOMATCH_BUT_SIG_HASH_MATCH",
            VerificationStatus::PkgNotGivenButSigHashMatch => "PKG_NOT_GIVEN_BUT_SIG_HASH_MATCH",
            VerificationStatus::PkgNotGivenAndSigHashNoMatch => {
                "PKG_NOT_GIVEN_AND_SIG_HASH_NOMATCH"
            }
        };
        write!(f, "{}", s)
    }
}

/// Result of looking up the loaded app in the curated internal database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InternalDatabaseStatus {
    Match,
    #[serde(rename = "NOMATCH")]
    NoMatch,
    /// The package is not in the database at all
    NotFound,
}

impl fmt::Display for InternalDatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InternalDatabaseStatus::Match => "MATCH",
            InternalDatabaseStatus::NoMatch => "NOMATCH",
            InternalDatabaseStatus::NotFound => "NOT_FOUND",
        };
        write!(f, "{}", s)
    }
}
