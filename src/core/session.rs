// src/core/session.rs
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use crate::generators::{PasswordGenerator, Result};
use crate::models::{GeneratedPassword, PasswordConfig};

/// Clamp a user-entered length into the accepted range.
pub fn clamp_length(value: i64) -> usize {
    let min = PasswordConfig::MIN_LENGTH as i64;
    let max = PasswordConfig::MAX_LENGTH as i64;
    value.clamp(min, max) as usize
}

#[derive(Debug, PartialEq, Eq)]
pub enum LengthInput {
    /// Field cleared while editing; nothing regenerated.
    Pending,
    /// Length accepted (after clamping) and a new password generated.
    Applied(usize),
    /// Not a number; state unchanged.
    Rejected,
}

/// Controller state: the current configuration, the password it produced,
/// and the transient "copied" confirmation.
///
/// Every effective configuration change regenerates the password exactly once.
pub struct GeneratorSession<R = OsRng> {
    generator: Arc<PasswordGenerator<R>>,
    config: PasswordConfig,
    password: GeneratedPassword,
    pending_length: bool,
    copied_at: Option<Instant>,
    copy_feedback: Duration,
}

impl<R: RngCore + CryptoRng> GeneratorSession<R> {
    pub fn new(
        generator: Arc<PasswordGenerator<R>>,
        mut config: PasswordConfig,
        copy_feedback: Duration,
    ) -> Result<Self> {
        config.length = clamp_length(i64::try_from(config.length).unwrap_or(i64::MAX));
        let password = generator.generate(&config)?;
        Ok(Self {
            generator,
            config,
            password,
            pending_length: false,
            copied_at: None,
            copy_feedback,
        })
    }

    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    pub fn password(&self) -> &GeneratedPassword {
        &self.password
    }

    /// True while the length field is cleared mid-edit.
    pub fn is_length_pending(&self) -> bool {
        self.pending_length
    }

    pub fn regenerate(&mut self) -> Result<&GeneratedPassword> {
        self.password = self.generator.generate(&self.config)?;
        Ok(&self.password)
    }

    // Config and password are committed together, only once generation
    // succeeds.
    fn apply(&mut self, config: PasswordConfig) -> Result<()> {
        if config != self.config {
            let password = self.generator.generate(&config)?;
            self.config = config;
            self.password = password;
        }
        Ok(())
    }

    /// Slider-style update: always clamped.
    pub fn set_length(&mut self, value: i64) -> Result<usize> {
        let length = clamp_length(value);
        self.apply(PasswordConfig { length, ..self.config })?;
        self.pending_length = false;
        Ok(length)
    }

    /// Manual text entry. An empty field is allowed while editing and leaves
    /// the current password in place.
    pub fn set_length_input(&mut self, input: &str) -> Result<LengthInput> {
        let input = input.trim();
        if input.is_empty() {
            self.pending_length = true;
            return Ok(LengthInput::Pending);
        }

        match input.parse::<i64>() {
            Ok(value) => self.set_length(value).map(LengthInput::Applied),
            Err(_) => Ok(LengthInput::Rejected),
        }
    }

    pub fn set_include_digits(&mut self, include: bool) -> Result<()> {
        self.apply(PasswordConfig { include_digits: include, ..self.config })
    }

    pub fn set_include_symbols(&mut self, include: bool) -> Result<()> {
        self.apply(PasswordConfig { include_symbols: include, ..self.config })
    }

    pub fn toggle_digits(&mut self) -> Result<bool> {
        let include = !self.config.include_digits;
        self.set_include_digits(include)?;
        Ok(include)
    }

    pub fn toggle_symbols(&mut self) -> Result<bool> {
        let include = !self.config.include_symbols;
        self.set_include_symbols(include)?;
        Ok(include)
    }

    /// Returns the exact current password and starts the copy confirmation.
    pub fn copy(&mut self) -> &str {
        self.copy_at(Instant::now())
    }

    pub fn copy_at(&mut self, now: Instant) -> &str {
        self.copied_at = Some(now);
        self.password.as_str()
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied_at(Instant::now())
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.saturating_duration_since(at) < self.copy_feedback,
            None => false,
        }
    }
}
