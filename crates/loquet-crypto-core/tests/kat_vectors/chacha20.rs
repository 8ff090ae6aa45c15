//! ChaCha20 Known-Answer Tests — RFC 8439 vectors.

use crate::hex;
use loquet_crypto_core::chacha20::{self, BLOCK_SIZE};
use loquet_crypto_core::ChaCha20;

/// RFC 8439 section 2.3.2 block function test: key 00..1f, nonce
/// 000000090000004a00000000, counter 1.
#[test]
fn rfc8439_block_function_test() {
    let mut key = [0u8; 32];
    for (i, byte) in key.iter_mut().enumerate() {
        *byte = i as u8;
    }
    let nonce: [u8; 12] = [
        0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00, 0x4a, 0x00, 0x00, 0x00, 0x00,
    ];
    let mut out = [0u8; BLOCK_SIZE];
    chacha20::block(&mut out, &key, &nonce, &1u32.to_le_bytes());
    assert_eq!(
        hex(&out),
        "10f1e7e4d13b5915500fdd1fa32071c4c7d1f4c733c06803\
         0422aa9ac3d46c4ed2826446079faa0914c2d705d98b02a2\
         b5129cd1de164eb9cbd083e8a2503c4e"
    );
}

/// RFC 8439 Appendix A.1 test vector 1: zero key, zero nonce, counter 0.
#[test]
fn appendix_a1_vector1() {
    let mut out = [0u8; BLOCK_SIZE];
    chacha20::block(&mut out, &[0u8; 32], &[0u8; 12], &0u32.to_le_bytes());
    assert_eq!(
        hex(&out),
        "76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1a\
         a836efcc8b770dc7da41597c5157488d7724e03fb8d84a37\
         6a43b8f41518a11cc387b669b2ee6586"
    );
}

/// RFC 8439 Appendix A.1 test vector 2: zero key, zero nonce, counter 1.
#[test]
fn appendix_a1_vector2() {
    let mut out = [0u8; BLOCK_SIZE];
    chacha20::block(&mut out, &[0u8; 32], &[0u8; 12], &1u32.to_le_bytes());
    assert_eq!(
        hex(&out),
        "9f07e7be5551387a98ba977c732d080dcb0f29a048e36569\
         12c6533e32ee7aed29b721769ce64e43d57133b074d839d5\
         31ed1f28510afb45ace10a1f4b794d6f"
    );
}

/// The driver's first 128 keystream bytes are the Appendix A.1 blocks for
/// counters 0 and 1 back to back.
#[test]
fn driver_keystream_matches_appendix_a1() {
    let mut driver = ChaCha20::new([0u8; 32], [0u8; 12]);
    let mut keystream = [0u8; 2 * BLOCK_SIZE];
    driver.apply_keystream(&mut keystream);
    assert_eq!(
        hex(&keystream),
        "76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1a\
         a836efcc8b770dc7da41597c5157488d7724e03fb8d84a37\
         6a43b8f41518a11cc387b669b2ee6586\
         9f07e7be5551387a98ba977c732d080dcb0f29a048e36569\
         12c6533e32ee7aed29b721769ce64e43d57133b074d839d5\
         31ed1f28510afb45ace10a1f4b794d6f"
    );
}
