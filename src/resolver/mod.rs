//! Resolution of an installed app's identity through the OS package surface.

use crate::core::{AppIcon, Hashes, InternalDatabaseStatus, VerificationInfo};
use crate::database::InternalDatabase;
use crate::hashing::extract_hashes;
use bytes::Bytes;
use std::collections::HashSet;
use tracing::{debug, info};

/// Signing details reported by the OS for one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningInfo {
    /// Certificates of the currently active signers
    pub apk_contents_signers: Vec<Bytes>,
    /// Signing lineage of a single-signer package, oldest first
    pub signing_certificate_history: Vec<Bytes>,
    pub has_multiple_signers: bool,
}

impl SigningInfo {
    /// Certificates that identify the package: every active signer when
    /// there are several, otherwise the full signing lineage.
    pub fn signer_certificates(&self) -> &[Bytes] {
        if self.has_multiple_signers {
            &self.apk_contents_signers
        } else {
            &self.signing_certificate_history
        }
    }

    pub fn hashes(&self) -> Hashes {
        extract_hashes(self.signer_certificates(), self.has_multiple_signers)
    }
}

/// Result of inspecting one installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub package_name: String,
    /// Application display label
    pub label: String,
    pub icon: AppIcon,
    pub signing_info: SigningInfo,
}

/// Read-only view of the OS package manager.
pub trait PackageInspector {
    /// Names of every installed package, system packages included.
    fn installed_packages(&self) -> Vec<String>;

    /// Names of packages that ship with the system image.
    fn system_packages(&self) -> Vec<String>;

    /// Full record of one package, signing certificates included.
    fn inspect(&self, package_name: &str) -> Option<PackageRecord>;
}

/// Everything the display layer needs about a resolved app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApp {
    pub name: String,
    pub package_name: String,
    pub hashes: Hashes,
    pub icon: AppIcon,
    pub internal_database_status: InternalDatabaseStatus,
}

/// Installed packages that are not part of the system image.
pub fn user_installed_packages<I: PackageInspector + ?Sized>(inspector: &I) -> Vec<String> {
    let system: HashSet<String> = inspector.system_packages().into_iter().collect();
    inspector
        .installed_packages()
        .into_iter()
        .filter(|name| !system.contains(name))
        .collect()
}

/// Find a user-installed package, hash its signers and look it up in the
/// internal database. `None` when the package is absent, a system package,
/// or gone by the time it is inspected.
pub fn resolve_app<I: PackageInspector + ?Sized>(
    inspector: &I,
    package_name: &str,
    database: &InternalDatabase,
) -> Option<ResolvedApp> {
    if !user_installed_packages(inspector)
        .iter()
        .any(|name| name == package_name)
    {
        debug!(package = %package_name, "package is not user installed");
        return None;
    }

    let record = inspector.inspect(package_name)?;
    let hashes = record.signing_info.hashes();
    let internal_database_status =
        database.lookup(&VerificationInfo::new(package_name, hashes.clone()));
    info!(
        package = %package_name,
        signers = hashes.len(),
        %internal_database_status,
        "resolved installed app"
    );

    Some(ResolvedApp {
        name: record.label,
        package_name: record.package_name,
        hashes,
        icon: record.icon,
        internal_database_status,
    })
}
