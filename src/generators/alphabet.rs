// src/generators/alphabet.rs
use std::fmt::{self, Write as _};

/// Upper then lower case Latin letters. Always part of the alphabet.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub const DIGITS: &str = "0123456789";

pub const SYMBOLS: &str = "!@#$%^&*-_+=[]{}~\\`";

/// Ordered set of characters a password is sampled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Wrap an arbitrary character list. May be empty, in which case
    /// sampling a non-zero length fails.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| f.write_char(*c))
    }
}

/// Build the sampling alphabet: letters, then digits and symbols when enabled.
///
/// The blocks are disjoint so the result never contains duplicates, and it is
/// never empty since letters cannot be switched off.
pub fn build_alphabet(include_digits: bool, include_symbols: bool) -> Alphabet {
    let mut chars = String::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());

    chars.push_str(LETTERS);
    if include_digits {
        chars.push_str(DIGITS);
    }
    if include_symbols {
        chars.push_str(SYMBOLS);
    }

    Alphabet::from_chars(chars.chars())
}
