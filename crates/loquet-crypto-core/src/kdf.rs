//! AES-KDF key strengthening (KeePass-compatible round function).
//!
//! This module provides:
//! - [`transform_rounds`] — the iterated AES-256-ECB round loop with a
//!   progress/cancellation callback
//! - [`AesKdfParams`] — serializable parameter set (stored in a vault header)
//! - [`calibrate`] — benchmark hardware and return a round count for a
//!   target derivation time
//!
//! # Round function
//!
//! Each round replaces both 16-byte halves of the 32-byte key with their
//! independent AES-256-ECB encryptions under the transform seed. There is
//! no chaining between the halves or between rounds. Round counts in the
//! hundreds of thousands to millions make the full transform take seconds;
//! callers should run it off any latency-sensitive thread and use the
//! callback for progress reporting and cooperative cancellation.

use crate::error::KdfError;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes256;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Transform seed length in bytes (AES-256 key).
pub const SEED_SIZE: usize = 32;

/// Transformed key length in bytes (two AES blocks).
pub const KEY_SIZE: usize = 32;

/// AES block length in bytes.
const BLOCK_LEN: usize = 16;

/// Progress callback cadence in rounds.
///
/// The callback fires on every round index divisible by this value,
/// including round 0. A cancellation request therefore takes effect within
/// at most this many rounds.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Default round count for fresh parameters.
pub const DEFAULT_ROUNDS: u64 = 100_000;

/// Rounds executed by the [`calibrate`] probe.
const PROBE_ROUNDS: u64 = 10_000;

/// Progress/cancellation hook: receives the current round index, returns
/// `true` to stop the transform.
pub type ProgressFn<'a> = &'a mut dyn FnMut(u64) -> bool;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// AES-KDF parameter set — stored in the vault header.
///
/// The transform seed is salt-like material persisted alongside the
/// database, not a secret key; the round count controls brute-force cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AesKdfParams {
    /// 32-byte transform seed, used as the AES-256 key of the round function.
    pub seed: [u8; SEED_SIZE],
    /// Number of rounds to apply.
    pub rounds: u64,
}

impl Default for AesKdfParams {
    /// Zero seed and [`DEFAULT_ROUNDS`]. Call [`AesKdfParams::randomize`]
    /// before first use.
    fn default() -> Self {
        Self {
            seed: [0u8; SEED_SIZE],
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl AesKdfParams {
    /// Replace the transform seed with fresh CSPRNG output.
    ///
    /// # Errors
    ///
    /// Returns `KdfError::SeedGeneration` if the CSPRNG fails.
    pub fn randomize(&mut self) -> Result<(), KdfError> {
        let mut seed = [0u8; SEED_SIZE];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| KdfError::SeedGeneration(format!("CSPRNG fill failed: {e}")))?;
        self.seed = seed;
        Ok(())
    }

    /// Apply this parameter set's transform to `key` in place.
    ///
    /// See [`transform_rounds`] for the full contract.
    ///
    /// # Errors
    ///
    /// Propagates [`KdfError`] from [`transform_rounds`].
    pub fn transform(
        &self,
        key: &mut [u8; KEY_SIZE],
        on_progress: Option<ProgressFn<'_>>,
    ) -> Result<u64, KdfError> {
        transform_rounds(&self.seed, key, self.rounds, on_progress)
    }
}

// ---------------------------------------------------------------------------
// Round loop
// ---------------------------------------------------------------------------

/// Apply `rounds` AES-KDF rounds to `key` in place.
///
/// `seed` keys a single-block AES-256-ECB encryptor; each round replaces
/// both 16-byte halves of `key` with their independent encryptions. The
/// caller owns `key` exclusively for the duration of the call.
///
/// Every [`PROGRESS_INTERVAL`]th round index (including round 0), the
/// callback, if supplied, is invoked synchronously on the calling thread
/// with the current round index. A `true` return stops the loop
/// immediately; this cooperative cancellation is reported as success.
/// The callback runs inside the hot loop and must not block.
///
/// Returns the number of rounds actually applied: `rounds` on completion,
/// or the round index at which the callback requested a stop. A caller
/// that cancelled must treat `key` as not yet derived.
///
/// # Errors
///
/// Returns `KdfError::EngineInitFailed` if the AES engine rejects the
/// seed, or `KdfError::EngineStepFailed` if a round's encrypt operation
/// fails. On error, `key` holds an undefined intermediate value and must
/// not be used.
pub fn transform_rounds(
    seed: &[u8; SEED_SIZE],
    key: &mut [u8; KEY_SIZE],
    rounds: u64,
    mut on_progress: Option<ProgressFn<'_>>,
) -> Result<u64, KdfError> {
    let engine = Aes256::new_from_slice(seed)
        .map_err(|e| KdfError::EngineInitFailed(format!("AES-256 key setup failed: {e}")))?;

    let (lo, hi) = key.split_at_mut(BLOCK_LEN);
    let lo = GenericArray::from_mut_slice(lo);
    let hi = GenericArray::from_mut_slice(hi);

    for round in 0..rounds {
        // PROGRESS_INTERVAL is a nonzero constant; the remainder cannot panic.
        #[allow(clippy::arithmetic_side_effects)]
        let report_due = round % PROGRESS_INTERVAL == 0;
        if report_due {
            if let Some(ref mut callback) = on_progress {
                if callback(round) {
                    return Ok(round);
                }
            }
        }

        engine.encrypt_block(lo);
        engine.encrypt_block(hi);
    }

    Ok(rounds)
}

// ---------------------------------------------------------------------------
// Calibration
// ---------------------------------------------------------------------------

/// Benchmark the current hardware and return a round count whose transform
/// takes roughly `target` on this machine.
///
/// Times a fixed probe batch of rounds and scales linearly. The result is
/// clamped to at least [`DEFAULT_ROUNDS`] so a calibrated vault never ends
/// up weaker than the default.
///
/// # Errors
///
/// Propagates [`KdfError`] from the probe transform.
pub fn calibrate(target: Duration) -> Result<u64, KdfError> {
    let seed = [0x5Au8; SEED_SIZE];
    let mut key = [0xA5u8; KEY_SIZE];

    let started = Instant::now();
    transform_rounds(&seed, &mut key, PROBE_ROUNDS, None)?;
    let elapsed = started.elapsed();

    // PROBE_ROUNDS is nonzero; clamp to 1ns so the division below is defined
    // even if the probe measures as instantaneous.
    let per_round_nanos = elapsed
        .as_nanos()
        .checked_div(u128::from(PROBE_ROUNDS))
        .unwrap_or(0)
        .max(1);
    let rounds = target.as_nanos().checked_div(per_round_nanos).unwrap_or(0);
    let rounds = u64::try_from(rounds).unwrap_or(u64::MAX);

    Ok(rounds.max(DEFAULT_ROUNDS))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
