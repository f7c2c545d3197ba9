//! Classification of normalized verification text against the loaded app.
//!
//! Line 0 of the text is either a package name or, when the user pasted only
//! a hash, the hash itself. The remaining lines are candidate digests. Rules
//! are applied in order and the first one that fires decides the outcome:
//!
//! 1. line 0 is itself one of the app's digests, either verbatim, as a bare
//!    hex string once colons are inserted, or as a digest wrapped over lines
//!    0 and 1 => `PkgNotGivenButSigHashMatch`
//! 2. line 0 has the length of a canonical digest => `PkgNotGivenAndSigHashNoMatch`
//! 3. package name and digest tests are combined into the four remaining
//!    outcomes.

use crate::core::{Hashes, VerificationStatus, FINGERPRINT_TEXT_LEN};
use crate::error::{Result, VerifierError};
use crate::hashing::insert_colons;
use crate::text::split_lines;
use tracing::{debug, error};

/// Fetch a line the classifier needs. A missing line is an invariant
/// violation of the normalized input, never a silent mismatch.
fn required_line<'a>(lines: &[&'a str], index: usize) -> Result<&'a str> {
    match lines.get(index) {
        Some(&line) => Ok(line),
        None => {
            let err = VerifierError::MissingLine {
                index,
                line_count: lines.len(),
            };
            error!(error = %err, "Malformed verification info");
            Err(err)
        }
    }
}

/// Lines after the first, without the empty lines that trail the text.
fn candidate_hashes<'l, 'a>(lines: &'l [&'a str]) -> &'l [&'a str] {
    let mut rest = lines.get(1..).unwrap_or(&[]);
    while let Some((last, init)) = rest.split_last() {
        if !last.is_empty() {
            break;
        }
        rest = init;
    }
    rest
}

/// Rule 1: the text starts with a hash and no package name.
fn is_bare_hash_match(lines: &[&str], current_hashes: &Hashes) -> Result<bool> {
    let line0 = required_line(lines, 0)?;
    if current_hashes.contains(line0) {
        return Ok(true);
    }
    if current_hashes.contains(&insert_colons(line0.trim())) {
        return Ok(true);
    }
    let line1 = required_line(lines, 1)?;
    let wrapped = format!("{}:{}", line0.trim(), line1.trim());
    Ok(current_hashes.contains(&wrapped))
}

/// Classify normalized verification text against the loaded app.
///
/// `verification_info_text` must be output of [`crate::text::normalize`].
///
/// # Errors
/// Returns [`VerifierError::MissingLine`] when the text is too short for a
/// line the rules must inspect.
pub fn classify(
    verification_info_text: &str,
    current_hashes: &Hashes,
    current_package_name: &str,
) -> Result<VerificationStatus> {
    let lines = split_lines(verification_info_text);

    if is_bare_hash_match(&lines, current_hashes)? {
        debug!("verification info is a bare matching hash");
        return Ok(VerificationStatus::PkgNotGivenButSigHashMatch);
    }

    let line0 = required_line(&lines, 0)?;
    if line0.chars().count() == FINGERPRINT_TEXT_LEN {
        debug!("verification info is a bare non-matching hash");
        return Ok(VerificationStatus::PkgNotGivenAndSigHashNoMatch);
    }

    let candidates = candidate_hashes(&lines);
    let package_matches = line0 == current_package_name;
    let hash_matches = if current_hashes.has_multiple_signers {
        // Every active signer, in order
        candidates.iter().eq(current_hashes.digests.iter())
    } else {
        candidates.iter().any(|c| current_hashes.contains(c))
    };
    debug!(
        package_matches,
        hash_matches,
        candidates = candidates.len(),
        has_multiple_signers = current_hashes.has_multiple_signers,
        "classified verification info"
    );

    Ok(match (package_matches, hash_matches) {
        (true, true) => VerificationStatus::Match,
        (true, false) => VerificationStatus::PkgMatchButSigHashNoMatch,
        (false, true) => VerificationStatus::PkgNoMatchButSigHashMatch,
        (false, false) => VerificationStatus::NoMatch,
    })
}
