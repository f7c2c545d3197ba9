#![no_main]
use appverifier::core::Hashes;
use appverifier::hashing::certificate_fingerprint;
use appverifier::matcher::classify;
use appverifier::text::normalize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let normalized = normalize(&text);
    for has_multiple_signers in [false, true] {
        let hashes = Hashes::new(vec![certificate_fingerprint(data)], has_multiple_signers);
        // Errors are fine; panics are not.
        let _ = classify(&normalized, &hashes, "com.example");
    }
});
