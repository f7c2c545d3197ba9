//! Common test utilities and helpers.

use appverifier::core::AppIcon;
use appverifier::resolver::{PackageInspector, PackageRecord, SigningInfo};
use bytes::Bytes;
use std::collections::BTreeMap;

/// Certificate blobs used across tests
pub mod certs {
    pub const EXAMPLE: &[u8] = b"-----example release certificate-----";
    pub const EXAMPLE_ROTATED: &[u8] = b"-----example rotated certificate-----";
    pub const SIGNER_A: &[u8] = b"-----multi signer a-----";
    pub const SIGNER_B: &[u8] = b"-----multi signer b-----";
    pub const ATTACKER: &[u8] = b"-----repackaged certificate-----";
}

/// In-memory stand-in for the OS package manager.
#[derive(Default)]
pub struct FakePackageManager {
    system: Vec<String>,
    packages: BTreeMap<String, PackageRecord>,
}

impl FakePackageManager {
    pub fn install(mut self, package_name: &str, label: &str, signing_info: SigningInfo) -> Self {
        self.packages.insert(
            package_name.to_string(),
            PackageRecord {
                package_name: package_name.to_string(),
                label: label.to_string(),
                icon: AppIcon::new(format!("icon:{}", package_name).into_bytes()),
                signing_info,
            },
        );
        self
    }

    pub fn install_system(mut self, package_name: &str, signing_info: SigningInfo) -> Self {
        self.system.push(package_name.to_string());
        self.install(package_name, package_name, signing_info)
    }
}

impl PackageInspector for FakePackageManager {
    fn installed_packages(&self) -> Vec<String> {
        self.packages.keys().cloned().collect()
    }

    fn system_packages(&self) -> Vec<String> {
        self.system.clone()
    }

    fn inspect(&self, package_name: &str) -> Option<PackageRecord> {
        self.packages.get(package_name).cloned()
    }
}

/// Signing info for a single-signer app with the given lineage, oldest first.
pub fn lineage(certs: &[&'static [u8]]) -> SigningInfo {
    let history: Vec<Bytes> = certs.iter().copied().map(Bytes::from_static).collect();
    SigningInfo {
        apk_contents_signers: history.last().cloned().into_iter().collect(),
        signing_certificate_history: history,
        has_multiple_signers: false,
    }
}

/// Signing info for an app with several concurrent signers.
pub fn multi_signer(certs: &[&'static [u8]]) -> SigningInfo {
    SigningInfo {
        apk_contents_signers: certs.iter().copied().map(Bytes::from_static).collect(),
        signing_certificate_history: Vec::new(),
        has_multiple_signers: true,
    }
}
