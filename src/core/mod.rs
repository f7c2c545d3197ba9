//! Core data types for app verification.
//!
//! Everything the parsing and matching engine reads or produces lives here:
//! digest lists, package identities, outcome enums and the display state.

pub mod hashes;
pub mod status;
pub mod ui_state;
pub mod verification_info;

pub use hashes::{is_fingerprint, Hashes, DIGEST_LEN, FINGERPRINT_TEXT_LEN};
pub use status::{InternalDatabaseStatus, VerificationStatus};
pub use ui_state::{AppIcon, VerifyAppUiState};
pub use verification_info::{InternalVerificationInfo, VerificationInfo};
