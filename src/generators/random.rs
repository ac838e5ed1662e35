// src/generators/random.rs
use rand_core::{CryptoRng, RngCore};

use super::{GeneratorError, Result};

/// A source of uniformly distributed indices suitable for credentials.
///
/// Implemented for every `RngCore + CryptoRng`, so `OsRng` or a seeded
/// `StdRng` work out of the box while statistical PRNGs are rejected at
/// compile time.
pub trait SecureRandom {
    /// Uniform index in `[0, upper)`. Fails with `InvalidAlphabet` when
    /// `upper` is zero.
    fn index(&mut self, upper: usize) -> Result<usize>;
}

impl<R: RngCore + CryptoRng + ?Sized> SecureRandom for R {
    fn index(&mut self, upper: usize) -> Result<usize> {
        if upper == 0 {
            return Err(GeneratorError::InvalidAlphabet);
        }
        let upper = upper as u64;

        // Largest multiple of `upper` that fits in a u32; anything above it
        // would bias the low indices.
        let range = u64::from(u32::MAX) + 1;
        let zone = range - range % upper;

        loop {
            let mut buf = [0u8; 4];
            self.try_fill_bytes(&mut buf)?;
            let value = u64::from(u32::from_le_bytes(buf));
            if value < zone {
                return Ok((value % upper) as usize);
            }
        }
    }
}

/// Entropy source that always fails, for exercising error paths.
#[cfg(test)]
pub(crate) struct BrokenRng;

#[cfg(test)]
impl RngCore for BrokenRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        Err(rand_core::Error::new("entropy source unavailable"))
    }
}

#[cfg(test)]
impl CryptoRng for BrokenRng {}

/// Serves `remaining` successful fills of zero bytes, then fails.
#[cfg(test)]
pub(crate) struct FlakyRng {
    remaining: usize,
}

#[cfg(test)]
impl FlakyRng {
    pub(crate) fn new(remaining: usize) -> Self {
        Self { remaining }
    }
}

#[cfg(test)]
impl RngCore for FlakyRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        if self.remaining == 0 {
            return Err(rand_core::Error::new("entropy source exhausted"));
        }
        self.remaining -= 1;
        dest.fill(0);
        Ok(())
    }
}

#[cfg(test)]
impl CryptoRng for FlakyRng {}
