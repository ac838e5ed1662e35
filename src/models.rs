// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordConfig {
    pub length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl PasswordConfig {
    pub const MIN_LENGTH: usize = 6;
    pub const MAX_LENGTH: usize = 100;
    pub const DEFAULT_LENGTH: usize = 12;

    pub fn new(length: usize, include_digits: bool, include_symbols: bool) -> Self {
        Self {
            length,
            include_digits,
            include_symbols,
        }
    }

    pub fn is_length_valid(&self) -> bool {
        (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&self.length)
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            include_digits: true,
            include_symbols: true,
        }
    }
}

/// A freshly sampled password. Never mutated; the next generation replaces it.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn from_chars(chars: Vec<char>) -> Self {
        Self(chars.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (the alphabet is ASCII, so also the byte length).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// Keep the secret out of logs and panic messages.
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.len())
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
