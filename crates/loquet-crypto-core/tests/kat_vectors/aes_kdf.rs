//! AES-KDF Known-Answer Tests.
//!
//! The one-round vectors reduce to the NIST AES-256 single-block vector;
//! the deep-round vectors were computed independently with a second AES
//! implementation.

use crate::hex;
use loquet_crypto_core::transform_rounds;

/// One round over zero seed and zero key is the NIST AES-256 zero-block
/// vector in both halves.
#[test]
fn one_round_zero_inputs() {
    let mut key = [0u8; 32];
    transform_rounds(&[0u8; 32], &mut key, 1, None).expect("transform should succeed");
    assert_eq!(
        hex(&key),
        "dc95c078a2408989ad48a21492842087dc95c078a2408989ad48a21492842087"
    );
}

/// 10,000 rounds over zero seed and zero key.
#[test]
fn ten_thousand_rounds_zero_inputs() {
    let mut key = [0u8; 32];
    transform_rounds(&[0u8; 32], &mut key, 10_000, None).expect("transform should succeed");
    assert_eq!(
        hex(&key),
        "8b79eecc93a0ee5dff30b4ea21636da48b79eecc93a0ee5dff30b4ea21636da4"
    );
}

/// 100,000 rounds (the default round count) over sequential-byte seed and
/// key, exercising a full progress-cadence window.
#[test]
fn default_round_count_sequential_inputs() {
    let mut seed = [0u8; 32];
    let mut key = [0u8; 32];
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte = i as u8;
    }
    for (i, byte) in key.iter_mut().enumerate() {
        *byte = (i + 32) as u8;
    }
    let completed =
        transform_rounds(&seed, &mut key, 100_000, None).expect("transform should succeed");
    assert_eq!(completed, 100_000);
    assert_eq!(
        hex(&key),
        "aab93c0f16ecccd96186d0898c8b54b95295c9f92a780a6fd8d579a2a9209c53"
    );
}
