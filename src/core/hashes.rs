//! Signing certificate digest lists.
//!
//! A `Hashes` value is the set of signer fingerprints observed for one app,
//! either from live package inspection or from a curated database record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length in bytes of a SHA-256 digest.
pub const DIGEST_LEN: usize = 32;

/// Length of a canonical colon-separated SHA-256 fingerprint (`3 * 32 - 1`).
pub const FINGERPRINT_TEXT_LEN: usize = DIGEST_LEN * 3 - 1;

/// Signer digests of an app.
///
/// With `has_multiple_signers` set, `digests` holds one entry per
/// concurrently active signer. Otherwise it holds the signing lineage, oldest
/// first, and any single entry is enough to identify the app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hashes {
    /// Canonical fingerprints (`AB:CD:...`), in the order reported by the OS
    pub digests: Vec<String>,
    /// Whether the app is signed by several signers at once
    pub has_multiple_signers: bool,
}

impl Hashes {
    pub fn new(digests: Vec<String>, has_multiple_signers: bool) -> Self {
        Self {
            digests,
            has_multiple_signers,
        }
    }

    /// Membership test against the digest list.
    pub fn contains(&self, digest: &str) -> bool {
        self.digests.iter().any(|d| d == digest)
    }

    /// True if at least one digest appears in both lists.
    pub fn overlaps(&self, other: &Hashes) -> bool {
        self.digests.iter().any(|d| other.contains(d))
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Validate that every digest is a canonical fingerprint.
    ///
    /// Returns the first offending digest.
    pub fn validate(&self) -> Result<(), String> {
        match self.digests.iter().find(|d| !is_fingerprint(d)) {
            Some(bad) => Err(bad.clone()),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Check that `s` is non-empty uppercase hex byte pairs joined by `:`.
///
/// Any digest length is accepted; only the shape is checked.
pub fn is_fingerprint(s: &str) -> bool {
    !s.is_empty()
        && s.split(':').all(|pair| {
            pair.len() == 2
                && pair
                    .bytes()
                    .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
        })
}

impl fmt::Display for Hashes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digests.is_empty() {
            return write!(f, "No hashes");
        }
        let signers = if self.has_multiple_signers {
            "multiple signers"
        } else {
            "single signer"
        };
        write!(f, "{} ({})", self.digests.join(", "), signers)
    }
}
