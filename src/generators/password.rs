// src/generators/password.rs
use std::sync::{Mutex, PoisonError};

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use super::alphabet::build_alphabet;
use super::sampler::sample;
use super::{GeneratorError, Result};
use crate::models::{GeneratedPassword, PasswordConfig};

/// Validates a configuration and samples a password from its alphabet.
///
/// The random source is acquired once and reused for every call. It sits
/// behind a mutex so a single generator can be shared between threads.
pub struct PasswordGenerator<R = OsRng> {
    rng: Mutex<R>,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator::with_rng(OsRng)
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator {
            rng: Mutex::new(rng),
        }
    }

    pub fn generate(&self, config: &PasswordConfig) -> Result<GeneratedPassword> {
        if !config.is_length_valid() {
            return Err(GeneratorError::InvalidLength {
                length: config.length,
                min: PasswordConfig::MIN_LENGTH,
                max: PasswordConfig::MAX_LENGTH,
            });
        }

        let alphabet = build_alphabet(config.include_digits, config.include_symbols);

        // A poisoned lock only means another caller panicked mid-draw; the
        // rng itself is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let chars = sample(&mut *rng, &alphabet, config.length)?;
        drop(rng);

        log::debug!(
            "Generated password of length {} from {}-character alphabet",
            chars.len(),
            alphabet.len()
        );

        Ok(GeneratedPassword::from_chars(chars))
    }
}
