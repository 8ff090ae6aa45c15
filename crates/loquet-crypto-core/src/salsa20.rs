//! Salsa20 stream cipher (Bernstein reference semantics).
//!
//! This module provides:
//! - [`block`] — generate one 64-byte keystream block from key, IV and counter
//! - [`Salsa20`] — stateful keystream driver that XORs across calls
//!
//! The block function is pure and total: fixed-size inputs, no error path.
//! All word arithmetic is unsigned 32-bit with wraparound; the cipher's
//! diffusion depends on wrapping addition.

use crate::secure::SecretBytes;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Keystream block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Key length in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// IV (nonce) length in bytes.
pub const IV_SIZE: usize = 8;

/// Block counter length in bytes (64-bit little-endian).
pub const COUNTER_SIZE: usize = 8;

/// Constant ("sigma") length in bytes.
pub const CONSTANT_SIZE: usize = 16;

/// The "expand 32-byte k" constant for 256-bit keys.
///
/// A fixed domain constant of the cipher, not configuration.
pub const SIGMA: [u8; CONSTANT_SIZE] = *b"expand 32-byte k";

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

/// One Salsa20 quarter-round over the state words at `a`, `b`, `c`, `d`.
#[inline]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

/// Generate one 64-byte Salsa20 keystream block.
///
/// Writes the block into `out`; reads `iv`, `counter`, `key` and `constant`
/// without modifying them. Deterministic: identical inputs always produce
/// an identical block. The caller increments the counter between blocks;
/// counter overflow semantics are the caller's responsibility.
pub fn block(
    out: &mut [u8; BLOCK_SIZE],
    iv: &[u8; IV_SIZE],
    counter: &[u8; COUNTER_SIZE],
    key: &[u8; KEY_SIZE],
    constant: &[u8; CONSTANT_SIZE],
) {
    let k: [u32; 8] = load_le_words(key);
    let n: [u32; 2] = load_le_words(iv);
    let t: [u32; 2] = load_le_words(counter);
    let c: [u32; 4] = load_le_words(constant);

    // Initial-state interleaving fixed by the Salsa20 specification.
    let initial: [u32; 16] = [
        c[0], k[0], k[1], k[2], //
        k[3], c[1], n[0], n[1], //
        t[0], t[1], c[2], k[4], //
        k[5], k[6], k[7], c[3],
    ];

    let mut x = initial;
    for _ in 0..10 {
        // Column round.
        quarter_round(&mut x, 0, 4, 8, 12);
        quarter_round(&mut x, 5, 9, 13, 1);
        quarter_round(&mut x, 10, 14, 2, 6);
        quarter_round(&mut x, 15, 3, 7, 11);
        // Row round.
        quarter_round(&mut x, 0, 1, 2, 3);
        quarter_round(&mut x, 5, 6, 7, 4);
        quarter_round(&mut x, 10, 11, 8, 9);
        quarter_round(&mut x, 15, 12, 13, 14);
    }

    // Feed-forward: add the initial words back in, then serialize.
    for (chunk, (word, init)) in out.chunks_exact_mut(4).zip(x.iter().zip(initial.iter())) {
        chunk.copy_from_slice(&word.wrapping_add(*init).to_le_bytes());
    }
}

// ---------------------------------------------------------------------------
// Streaming driver
// ---------------------------------------------------------------------------

/// Stateful Salsa20 keystream driver.
///
/// Generates keystream blocks with an incrementing 64-bit counter and XORs
/// them over caller buffers. Keystream position is maintained across calls,
/// so splitting one payload into several [`Salsa20::apply_keystream`] calls
/// produces the same result as a single call. Encryption and decryption are
/// the same operation.
///
/// Key, IV and buffered keystream are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Salsa20 {
    key: SecretBytes<KEY_SIZE>,
    iv: SecretBytes<IV_SIZE>,
    counter: u64,
    block: [u8; BLOCK_SIZE],
    pos: usize,
}

impl Salsa20 {
    /// Create a driver over the given key and IV, with the counter at 0.
    #[must_use]
    pub fn new(key: [u8; KEY_SIZE], iv: [u8; IV_SIZE]) -> Self {
        Self {
            key: SecretBytes::new(key),
            iv: SecretBytes::new(iv),
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
    /// The counter wraps on overflow; avoiding reuse of a (key, IV, counter)
    /// triple past 2^64 blocks is the caller's responsibility.
    fn refill(&mut self) {
        let counter_bytes = self.counter.to_le_bytes();
        block(
            &mut self.block,
            self.iv.expose(),
            &counter_bytes,
            self.key.expose(),
            &SIGMA,
        );
        self.counter = self.counter.wrapping_add(1);
        self.pos = 0;
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
