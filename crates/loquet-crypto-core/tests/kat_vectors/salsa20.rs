//! Salsa20 Known-Answer Tests — Bernstein reference / ECRYPT vectors.

use crate::hex;
use loquet_crypto_core::salsa20::{self, BLOCK_SIZE, SIGMA};
use loquet_crypto_core::Salsa20;

/// ECRYPT verified vectors, Set 6-style zero input: all-zero key, IV and
/// counter. Ground truth from the reference implementation's test suite.
#[test]
fn zero_key_zero_iv_block_zero() {
    let mut out = [0u8; BLOCK_SIZE];
    salsa20::block(&mut out, &[0u8; 8], &[0u8; 8], &[0u8; 32], &SIGMA);
    assert_eq!(
        hex(&out),
        "9a97f65b9b4c721b960a672145fca8d4e32e67f9111ea979\
         ce9c4826806aeee63de9c0da2bd7f91ebcb2639bf989c625\
         1b29bf38d39a9bdce7c55f4b2ac12a39"
    );
}

/// ECRYPT Set 1, vector 0: key byte 0 is 0x80, everything else zero.
#[test]
fn ecrypt_set1_vector0_first_block() {
    let mut key = [0u8; 32];
    key[0] = 0x80;
    let mut out = [0u8; BLOCK_SIZE];
    salsa20::block(&mut out, &[0u8; 8], &[0u8; 8], &key, &SIGMA);
    assert_eq!(
        hex(&out),
        "e3be8fdd8beca2e3ea8ef9475b29a6e7003951e1097a5c38\
         d23b7a5fad9f6844b22c97559e2723c7cbbd3fe4fc8d9a07\
         44652a83e72a9c461876af4d7ef1a117"
    );
}

/// The driver must produce the concatenation of the counter-0 and
/// counter-1 blocks as its first 128 keystream bytes.
#[test]
fn driver_keystream_first_two_blocks() {
    let mut driver = Salsa20::new([0u8; 32], [0u8; 8]);
    let mut keystream = [0u8; 2 * BLOCK_SIZE];
    driver.apply_keystream(&mut keystream);

    let mut expected = [0u8; 2 * BLOCK_SIZE];
    let (first, second) = expected.split_at_mut(BLOCK_SIZE);
    salsa20::block(
        first.try_into().expect("64-byte half"),
        &[0u8; 8],
        &0u64.to_le_bytes(),
        &[0u8; 32],
        &SIGMA,
    );
    salsa20::block(
        second.try_into().expect("64-byte half"),
        &[0u8; 8],
        &1u64.to_le_bytes(),
        &[0u8; 32],
        &SIGMA,
    );

    assert_eq!(keystream, expected);
}
