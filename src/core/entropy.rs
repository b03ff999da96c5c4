//! # Entropy Source
//!
//! Produces the six independent bits a cast consumes. The strong path
//! hashes 32 bytes of OS randomness together with a nanosecond timestamp
//! through SHA-256 and extracts the bits from the first digest byte.
//!
//! If the OS source or the clock is unavailable the source degrades to a
//! seeded non-cryptographic generator. Degraded, not fatal: the oracle
//! keeps running either way.

use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};
use sha2::{Digest, Sha256};

use crate::core::hexagram::LineValue;

pub struct EntropySource {
    fallback: StdRng,
    warned: bool,
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource {
    pub fn new() -> Self {
        // Seed material for the degraded path only; quality does not matter
        // beyond being different per process.
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
            ^ (std::process::id() as u64).rotate_left(32);
        Self {
            fallback: StdRng::seed_from_u64(seed),
            warned: false,
        }
    }

    /// Draw six independent uniform bits, bottom line first.
    pub fn sample6(&mut self) -> [LineValue; 6] {
        let byte = match self.digest_byte() {
            Some(byte) => byte,
            None => {
                if !self.warned {
                    warn!("OS entropy unavailable, falling back to PRNG");
                    self.warned = true;
                }
                self.fallback.random::<u8>()
            }
        };
        std::array::from_fn(|i| LineValue::from_bit((byte >> i) & 1))
    }

    /// One byte of a SHA-256 digest over OS randomness + timestamp, or
    /// `None` when either input is unavailable.
    fn digest_byte(&self) -> Option<u8> {
        let mut seed = [0u8; 32];
        OsRng.try_fill_bytes(&mut seed).ok()?;
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_nanos();

        let mut hasher = Sha256::new();
        hasher.update(seed);
        hasher.update(nanos.to_be_bytes());
        Some(hasher.finalize()[0])
    }
}
