use crate::common::{certs, lineage, multi_signer, FakePackageManager};
use appverifier::core::{
    Hashes, InternalDatabaseStatus, InternalVerificationInfo, VerificationStatus,
};
use appverifier::hashing::certificate_fingerprint;
use appverifier::{AppVerifier, InternalDatabase};

fn fp(cert: &[u8]) -> String {
    certificate_fingerprint(cert)
}

fn curated_database() -> InternalDatabase {
    InternalDatabase::new(vec![
        InternalVerificationInfo::new(
            "com.example",
            vec![Hashes::new(vec![fp(certs::EXAMPLE)], false)],
        ),
        InternalVerificationInfo::new(
            "com.multi",
            vec![Hashes::new(vec![fp(certs::SIGNER_A), fp(certs::SIGNER_B)], true)],
        ),
    ])
    .unwrap()
}

fn package_manager() -> FakePackageManager {
    FakePackageManager::default()
        .install(
            "com.example",
            "Example",
            lineage(&[certs::EXAMPLE, certs::EXAMPLE_ROTATED]),
        )
        .install(
            "com.multi",
            "Multi",
            multi_signer(&[certs::SIGNER_A, certs::SIGNER_B]),
        )
        .install("com.repack", "Repack", lineage(&[certs::ATTACKER]))
        .install_system("android.platform", lineage(&[certs::ATTACKER]))
}

#[test]
fn installed_app_is_resolved_and_verified() {
    let db = curated_database();
    let pm = package_manager();
    let mut verifier = AppVerifier::new(&db);

    assert!(verifier.find_and_set_app_verification_info("com.example", &pm));
    let state = verifier.ui_state();
    assert_eq!(state.name, "Example");
    assert_eq!(state.package_name, "com.example");
    assert_eq!(
        state.hashes.digests,
        vec![fp(certs::EXAMPLE), fp(certs::EXAMPLE_ROTATED)]
    );
    assert_eq!(
        state.internal_database_status,
        Some(InternalDatabaseStatus::Match)
    );
    assert_eq!(
        state.icon.as_ref().map(|icon| icon.data().to_vec()),
        Some(b"icon:com.example".to_vec())
    );
    assert!(!state.app_not_found_or_invalid_format);

    let pasted = format!("com.example\n{}", fp(certs::EXAMPLE_ROTATED));
    assert_eq!(
        verifier.verify_from_text(&pasted).unwrap(),
        VerificationStatus::Match
    );

    let pasted = format!("other.pkg\n{}", fp(certs::EXAMPLE));
    assert_eq!(
        verifier.verify_from_text(&pasted).unwrap(),
        VerificationStatus::PkgNoMatchButSigHashMatch
    );
}

#[test]
fn repackaged_app_fails_both_sources() {
    let db = curated_database();
    let pm = package_manager();
    let mut verifier = AppVerifier::new(&db);

    assert!(verifier.find_and_set_app_verification_info("com.repack", &pm));
    assert_eq!(
        verifier.ui_state().internal_database_status,
        Some(InternalDatabaseStatus::NotFound)
    );

    let published = format!("com.repack {}", fp(certs::EXAMPLE));
    assert_eq!(
        verifier.verify_from_text(&published).unwrap(),
        VerificationStatus::PkgMatchButSigHashNoMatch
    );

    assert_eq!(
        verifier.verify_from_text(&fp(certs::EXAMPLE)).unwrap(),
        VerificationStatus::PkgNotGivenAndSigHashNoMatch
    );
}

#[test]
fn multi_signer_app_needs_every_signer_in_order() {
    let db = curated_database();
    let pm = package_manager();
    let mut verifier = AppVerifier::new(&db);

    assert!(verifier.find_and_set_app_verification_info("com.multi", &pm));
    assert_eq!(
        verifier.ui_state().internal_database_status,
        Some(InternalDatabaseStatus::Match)
    );

    let a = fp(certs::SIGNER_A);
    let b = fp(certs::SIGNER_B);
    assert_eq!(
        verifier
            .verify_from_text(&format!("com.multi\n{}\n{}", a, b))
            .unwrap(),
        VerificationStatus::Match
    );
    assert_eq!(
        verifier
            .verify_from_text(&format!("com.multi\n{}\n{}", b, a))
            .unwrap(),
        VerificationStatus::PkgMatchButSigHashNoMatch
    );
    assert_eq!(
        verifier
            .verify_from_text(&format!("other\n{}\n{}", b, a))
            .unwrap(),
        VerificationStatus::NoMatch
    );
}

#[test]
fn missing_and_system_apps_set_not_found_flag_only() {
    let db = curated_database();
    let pm = package_manager();
    let mut verifier = AppVerifier::new(&db);

    assert!(verifier.find_and_set_app_verification_info("com.example", &pm));
    let before = verifier.ui_state().clone();

    assert!(!verifier.find_and_set_app_verification_info("android.platform", &pm));
    assert!(verifier.ui_state().app_not_found_or_invalid_format);
    assert_eq!(verifier.ui_state().package_name, before.package_name);
    assert_eq!(verifier.ui_state().hashes, before.hashes);

    verifier.clear_ui_state();
    assert!(!verifier.find_and_set_app_verification_info("com.absent", &pm));
    assert!(verifier.ui_state().app_not_found_or_invalid_format);
    assert!(verifier.ui_state().package_name.is_empty());
}

#[test]
fn bare_hash_paste_without_package_name() {
    let db = curated_database();
    let pm = package_manager();
    let mut verifier = AppVerifier::new(&db);
    assert!(verifier.find_and_set_app_verification_info("com.example", &pm));

    let bare = fp(certs::EXAMPLE).replace(':', "").to_lowercase();
    assert_eq!(
        verifier.verify_from_text(&bare).unwrap(),
        VerificationStatus::PkgNotGivenButSigHashMatch
    );
    assert_eq!(
        verifier.ui_state().verification_status,
        Some(VerificationStatus::PkgNotGivenButSigHashMatch)
    );
}
