//! Signing certificate fingerprints.
//!
//! Certificates are hashed with SHA-256 and rendered in the canonical
//! `AB:CD:...:EF` form used everywhere else in the crate.

use crate::core::Hashes;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Computes the canonical SHA-256 fingerprint of one certificate.
pub fn certificate_fingerprint(certificate: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(certificate);
    format_fingerprint(&hasher.finalize())
}

/// Renders digest bytes as uppercase hex pairs joined by `:`.
///
/// A `k`-byte digest yields `3 * k - 1` characters; an empty digest yields "".
pub fn format_fingerprint(digest: &[u8]) -> String {
    digest
        .iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(":")
}

/// Inserts `:` after every second character except the last, then uppercases.
///
/// Turns a pasted bare digest such as `ab01cd` into `AB:01:CD`. Input of odd
/// length or with non-hex characters is converted all the same.
pub fn insert_colons(bare: &str) -> String {
    let len = bare.chars().count();
    let mut converted = String::with_capacity(len + len / 2);
    for (index, c) in bare.chars().enumerate() {
        converted.push(c);
        if index % 2 != 0 && index != len - 1 {
            converted.push(':');
        }
    }
    converted.to_uppercase()
}

/// Hash every signer certificate, preserving input order.
///
/// `has_multiple_signers` comes from the OS and is passed through unchanged.
pub fn extract_hashes<I, C>(certificates: I, has_multiple_signers: bool) -> Hashes
where
    I: IntoIterator<Item = C>,
    C: AsRef<[u8]>,
{
    let digests: Vec<String> = certificates
        .into_iter()
        .map(|cert| certificate_fingerprint(cert.as_ref()))
        .collect();
    debug!(
        count = digests.len(),
        has_multiple_signers, "Extracted signing certificate digests"
    );
    Hashes::new(digests, has_multiple_signers)
}
