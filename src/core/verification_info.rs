//! Package identity paired with signer digests.

use crate::core::hashes::Hashes;
use serde::{Deserialize, Serialize};

/// Identity of one app: a package name and the digests of its signers.
///
/// Built either from live package inspection or from pasted verification text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationInfo {
    pub package_name: String,
    pub hashes: Hashes,
}

impl VerificationInfo {
    pub fn new(package_name: impl Into<String>, hashes: Hashes) -> Self {
        Self {
            package_name: package_name.into(),
            hashes,
        }
    }
}

/// A curated internal database record.
///
/// A maintained app may have shipped under several signing configurations
/// over its lifetime (key rotation, signer migrations), so one record keeps
/// every accepted `Hashes` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalVerificationInfo {
    pub package_name: String,
    pub hashes_list: Vec<Hashes>,
}

impl InternalVerificationInfo {
    pub fn new(package_name: impl Into<String>, hashes_list: Vec<Hashes>) -> Self {
        Self {
            package_name: package_name.into(),
            hashes_list,
        }
    }
}
