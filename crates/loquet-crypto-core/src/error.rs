//! Cryptographic error types for `loquet-crypto-core`.
//!
//! Only the AES-KDF carries an error surface. The stream-cipher block
//! functions are total over correctly sized inputs and cannot fail.

use thiserror::Error;

/// Errors produced by the AES-KDF round loop.
///
/// Cooperative cancellation is *not* an error: a progress callback that
/// requests a stop makes [`crate::kdf::transform_rounds`] return `Ok` with
/// the number of rounds actually applied.
#[derive(Debug, Error)]
pub enum KdfError {
    /// The AES engine could not be constructed from the transform seed.
    #[error("AES engine initialization failed: {0}")]
    EngineInitFailed(String),

    /// A single round's encrypt operation failed. The key buffer is left in
    /// an undefined intermediate state and must not be used.
    #[error("AES engine failed at round {round}")]
    EngineStepFailed {
        /// Round index at which the engine failed.
        round: u64,
    },

    /// CSPRNG failure while drawing a fresh transform seed.
    #[error("transform seed generation failed: {0}")]
    SeedGeneration(String),
}
