//! Display state of the app currently being verified.

use crate::core::hashes::Hashes;
use crate::core::status::{InternalDatabaseStatus, VerificationStatus};
use bytes::Bytes;

/// Opaque encoded icon of an installed app, as handed over by the OS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppIcon(pub Bytes);

impl AppIcon {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    pub fn data(&self) -> &[u8] {
        &self.0
    }
}

/// Fields rendered by the UI layer. Plain slots; the last write wins.
///
/// `Default` is the cleared state: nothing loaded, no status computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyAppUiState {
    /// Application display label
    pub name: String,
    pub package_name: String,
    pub hashes: Hashes,
    pub icon: Option<AppIcon>,
    pub internal_database_status: Option<InternalDatabaseStatus>,
    pub verification_status: Option<VerificationStatus>,
    pub app_not_found_or_invalid_format: bool,
}
