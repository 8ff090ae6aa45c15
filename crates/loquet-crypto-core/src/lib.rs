//! `loquet-crypto-core` — Pure cryptographic primitives for LOQUET.
//!
//! This crate is the audit target: zero network, zero async, zero UI
//! dependencies. It carries the vault's low-level numerical kernels:
//! the Salsa20 and ChaCha20 keystream block functions with their
//! streaming drivers, and the AES-KDF round loop used to strengthen
//! password-derived keys.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod secure;

pub mod chacha20;
pub mod salsa20;

pub mod kdf;

pub use chacha20::ChaCha20;
pub use error::KdfError;
pub use kdf::{
    calibrate, transform_rounds, AesKdfParams, ProgressFn, DEFAULT_ROUNDS, PROGRESS_INTERVAL,
};
pub use salsa20::Salsa20;
pub use secure::SecretBytes;
