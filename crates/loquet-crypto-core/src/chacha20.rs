//! ChaCha20 stream cipher, IETF variant (RFC 8439 semantics).
//!
//! This module provides:
//! - [`block`] — generate one 64-byte keystream block from key, nonce and counter
//! - [`ChaCha20`] — stateful keystream driver with a 32-bit block counter
//!
//! ChaCha20 and Salsa20 share the add-rotate-XOR structure over a 4x4 word
//! state but differ in initial-state layout, round permutation pattern and
//! rotation constants; the two are not interchangeable.

use crate::secure::SecretBytes;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Keystream block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Key length in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// Nonce length in bytes (96 bits, IETF variant).
pub const NONCE_SIZE: usize = 12;

/// Block counter length in bytes (32-bit little-endian, IETF variant).
pub const COUNTER_SIZE: usize = 4;

/// The "expand 32-byte k" constant words, little-endian.
///
/// A fixed domain constant of the cipher, not configuration.
pub const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

// ---------------------------------------------------------------------------
// Core block function
// ---------------------------------------------------------------------------

/// Load little-endian 32-bit words from a byte buffer.
fn load_le_words<const N: usize>(bytes: &[u8]) -> [u32; N] {
    let mut words = [0u32; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(chunk);
        *word = u32::from_le_bytes(buf);
    }
    words
}

/// One ChaCha20 quarter-round over the state words at `a`, `b`, `c`, `d`.
#[inline]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(16);
    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(12);
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(8);
    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(7);
}

/// Generate one 64-byte ChaCha20 keystream block.
///
/// Writes the block into `out`; reads `key`, `nonce` and `counter` without
/// modifying them. Deterministic: identical inputs always produce an
/// identical block. The caller increments the counter between blocks;
/// counter overflow semantics are the caller's responsibility.
pub fn block(
    out: &mut [u8; BLOCK_SIZE],
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    counter: &[u8; COUNTER_SIZE],
) {
    let k: [u32; 8] = load_le_words(key);
    let n: [u32; 3] = load_le_words(nonce);
    let t: [u32; 1] = load_le_words(counter);

    // IETF setup: constants, key, 32-bit counter, 96-bit nonce.
    let initial: [u32; 16] = [
        CONSTANTS[0], CONSTANTS[1], CONSTANTS[2], CONSTANTS[3], //
        k[0], k[1], k[2], k[3], //
        k[4], k[5], k[6], k[7], //
        t[0], n[0], n[1], n[2],
    ];

    let mut x = initial;
    for _ in 0..10 {
        // Column round.
        quarter_round(&mut x, 0, 4, 8, 12);
        quarter_round(&mut x, 1, 5, 9, 13);
        quarter_round(&mut x, 2, 6, 10, 14);
        quarter_round(&mut x, 3, 7, 11, 15);
        // Diagonal round.
        quarter_round(&mut x, 0, 5, 10, 15);
        quarter_round(&mut x, 1, 6, 11, 12);
        quarter_round(&mut x, 2, 7, 8, 13);
        quarter_round(&mut x, 3, 4, 9, 14);
    }

    // Feed-forward: add the initial words back in, then serialize.
    for (chunk, (word, init)) in out.chunks_exact_mut(4).zip(x.iter().zip(initial.iter())) {
        chunk.copy_from_slice(&word.wrapping_add(*init).to_le_bytes());
    }
}

// ---------------------------------------------------------------------------
// Streaming driver
// ---------------------------------------------------------------------------

/// Stateful ChaCha20 keystream driver.
///
/// Generates keystream blocks with an incrementing 32-bit counter and XORs
/// them over caller buffers. Keystream position is maintained across calls,
/// so splitting one payload into several [`ChaCha20::apply_keystream`] calls
/// produces the same result as a single call. Encryption and decryption are
/// the same operation.
///
/// Key, nonce and buffered keystream are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    key: SecretBytes<KEY_SIZE>,
    nonce: SecretBytes<NONCE_SIZE>,
    counter: u32,
    block: [u8; BLOCK_SIZE],
    pos: usize,
}

impl ChaCha20 {
    /// Create a driver over the given key and nonce, with the counter at 0.
    #[must_use]
    pub fn new(key: [u8; KEY_SIZE], nonce: [u8; NONCE_SIZE]) -> Self {
        Self {
            key: SecretBytes::new(key),
            nonce: SecretBytes::new(nonce),
            counter: 0,
            block: [0u8; BLOCK_SIZE],
            // Past-the-end position forces block generation on first use.
            pos: BLOCK_SIZE,
        }
    }

    /// XOR the next `buf.len()` keystream bytes into `buf` in place.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        for byte in buf {
            if self.pos == BLOCK_SIZE {
                self.refill();
            }
            *byte ^= self.block[self.pos];
            self.pos = self.pos.saturating_add(1);
        }
    }

    /// Generate the next keystream block and advance the counter.
    ///
    /// The 32-bit counter wraps on overflow; staying within 2^32 blocks
    /// (256 GiB) per (key, nonce) pair is the caller's responsibility.
    fn refill(&mut self) {
        let counter_bytes = self.counter.to_le_bytes();
        block(
            &mut self.block,
            self.key.expose(),
            self.nonce.expose(),
            &counter_bytes,
        );
        self.counter = self.counter.wrapping_add(1);
        self.pos = 0;
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
