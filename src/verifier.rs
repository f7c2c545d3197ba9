//! Verification session for the app currently on screen.
//!
//! `AppVerifier` owns the display state and borrows the curated database.
//! It is driven from a single thread; every operation completes
//! synchronously and overwrites the affected slots of the state.

use crate::core::{
    AppIcon, Hashes, InternalDatabaseStatus, VerificationStatus, VerifyAppUiState,
};
use crate::database::InternalDatabase;
use crate::error::Result;
use crate::matcher::classify;
use crate::resolver::{resolve_app, PackageInspector};
use crate::text::normalize;
use tracing::{info, warn};

#[derive(Debug)]
pub struct AppVerifier<'db> {
    database: &'db InternalDatabase,
    ui_state: VerifyAppUiState,
}

impl<'db> AppVerifier<'db> {
    pub fn new(database: &'db InternalDatabase) -> Self {
        Self {
            database,
            ui_state: VerifyAppUiState::default(),
        }
    }

    pub fn ui_state(&self) -> &VerifyAppUiState {
        &self.ui_state
    }

    pub fn database(&self) -> &'db InternalDatabase {
        self.database
    }

    pub fn set_app_verification_info(
        &mut self,
        name: impl Into<String>,
        package_name: impl Into<String>,
        hashes: Hashes,
        internal_database_status: InternalDatabaseStatus,
    ) {
        self.ui_state.name = name.into();
        self.ui_state.package_name = package_name.into();
        self.ui_state.hashes = hashes;
        self.ui_state.internal_database_status = Some(internal_database_status);
    }

    pub fn set_app_icon(&mut self, icon: AppIcon) {
        self.ui_state.icon = Some(icon);
    }

    pub fn set_app_not_found_or_invalid_format(&mut self, value: bool) {
        self.ui_state.app_not_found_or_invalid_format = value;
    }

    /// Normalize pasted text into canonical verification info.
    pub fn verification_info_text(&self, text: &str) -> String {
        normalize(text)
    }

    /// Compare pasted text with the loaded app and record the outcome.
    ///
    /// On error the previous verification status is left untouched.
    pub fn verify_from_text(&mut self, text: &str) -> Result<VerificationStatus> {
        let normalized = normalize(text);
        let status = classify(
            &normalized,
            &self.ui_state.hashes,
            &self.ui_state.package_name,
        )?;
        info!(package = %self.ui_state.package_name, %status, "verified from text");
        self.ui_state.verification_status = Some(status);
        Ok(status)
    }

    /// Load the named user-installed app into the display state.
    ///
    /// When the package cannot be found only the not-found flag is set; the
    /// rest of the state is left as it was. Returns whether the app was found.
    pub fn find_and_set_app_verification_info<I: PackageInspector + ?Sized>(
        &mut self,
        package_name: &str,
        inspector: &I,
    ) -> bool {
        match resolve_app(inspector, package_name, self.database) {
            Some(app) => {
                self.set_app_verification_info(
                    app.name,
                    app.package_name,
                    app.hashes,
                    app.internal_database_status,
                );
                self.set_app_icon(app.icon);
                true
            }
            None => {
                warn!(package = %package_name, "app not found or invalid format");
                self.set_app_not_found_or_invalid_format(true);
                false
            }
        }
    }

    /// Replace the whole display state with the cleared state.
    pub fn clear_ui_state(&mut self) {
        self.ui_state = VerifyAppUiState::default();
    }
}
