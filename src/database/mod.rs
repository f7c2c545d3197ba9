//! Curated internal database of known-good apps.
//!
//! The database is a read-only list of [`InternalVerificationInfo`] records.
//! It is loaded once through [`InternalDatabase::from_config`] (or one of the
//! lower-level constructors) and then passed by reference to whoever needs a
//! lookup; there is no process-wide instance.

use crate::config::DatabaseConfig;
use crate::core::{InternalDatabaseStatus, InternalVerificationInfo, VerificationInfo};
use crate::error::{Result, VerifierError};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Look up `info` in `records`.
///
/// Only the first record carrying the package name is considered. Apps with
/// multiple signers need a structurally equal `Hashes` entry. Single-signer
/// apps match on any shared digest with a single-signer entry, which keeps
/// rotated signing lineages verifiable.
pub fn lookup(info: &VerificationInfo, records: &[InternalVerificationInfo]) -> InternalDatabaseStatus {
    let Some(record) = records
        .iter()
        .find(|record| record.package_name == info.package_name)
    else {
        return InternalDatabaseStatus::NotFound;
    };

    let matched = if info.hashes.has_multiple_signers {
        record.hashes_list.contains(&info.hashes)
    } else {
        record
            .hashes_list
            .iter()
            .filter(|entry| !entry.has_multiple_signers)
            .any(|entry| info.hashes.overlaps(entry))
    };

    if matched {
        InternalDatabaseStatus::Match
    } else {
        InternalDatabaseStatus::NoMatch
    }
}

/// Read-only handle over the curated records.
#[derive(Debug, Clone, Default)]
pub struct InternalDatabase {
    records: Vec<InternalVerificationInfo>,
}

impl InternalDatabase {
    /// Build the database from records, validating every digest.
    pub fn new(records: Vec<InternalVerificationInfo>) -> Result<Self> {
        for record in &records {
            if record.package_name.trim().is_empty() {
                return Err(VerifierError::InvalidDatabase(
                    "record with empty package name".to_string(),
                ));
            }
            for hashes in &record.hashes_list {
                hashes
                    .validate()
                    .map_err(|digest| VerifierError::InvalidDigest {
                        package_name: record.package_name.clone(),
                        digest,
                    })?;
            }
        }
        debug!(records = records.len(), "internal database built");
        Ok(Self { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<InternalVerificationInfo> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Read a JSON array of records from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let db = Self::from_json_str(&json)?;
        info!(path = %path.display(), records = db.len(), "internal database loaded");
        Ok(db)
    }

    /// Load point used at startup. No configured path means an empty database.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        match &config.path {
            Some(path) => Self::from_path(path),
            None => {
                info!("no internal database configured; every lookup will be NOT_FOUND");
                Ok(Self::default())
            }
        }
    }

    pub fn records(&self) -> &[InternalVerificationInfo] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Classify `info` against the curated records.
    pub fn lookup(&self, info: &VerificationInfo) -> InternalDatabaseStatus {
        let status = lookup(info, &self.records);
        debug!(package = %info.package_name, %status, "internal database lookup");
        status
    }
}
