// src/generators/mod.rs
use thiserror::Error;

pub mod alphabet;
pub mod password;
pub mod random;
pub mod sampler;

pub use alphabet::{build_alphabet, Alphabet, DIGITS, LETTERS, SYMBOLS};
pub use password::PasswordGenerator;
pub use random::SecureRandom;
pub use sampler::sample;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Password length {length} is out of range (must be between {min} and {max})")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Cannot sample from an empty alphabet")]
    InvalidAlphabet,

    #[error("Random source failure: {0}")]
    RandomSource(#[from] rand_core::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
