// src/cli/handlers.rs
use std::error::Error;
use std::io::Write;

use rand_core::{CryptoRng, RngCore};
use serde::Serialize;

use crate::core::clamp_length;
use crate::generators::PasswordGenerator;
use crate::models::{GeneratedPassword, PasswordConfig};
use crate::utils::copy_to_clipboard;

#[derive(Debug, Serialize)]
struct GenerateOutput<'a> {
    length: usize,
    include_digits: bool,
    include_symbols: bool,
    passwords: &'a [GeneratedPassword],
}

/// Collapse an `--x` / `--no-x` flag pair into an override; clap keeps only
/// the last one given.
pub fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Resolve CLI flags against the configured defaults. Lengths are clamped
/// the way the interactive controls clamp them.
pub fn resolve_config(
    defaults: &PasswordConfig,
    length: Option<i64>,
    digits: Option<bool>,
    symbols: Option<bool>,
) -> PasswordConfig {
    let length = match length {
        Some(requested) => {
            let clamped = clamp_length(requested);
            if clamped as i64 != requested {
                log::warn!("Requested length {} clamped to {}", requested, clamped);
                eprintln!("⚠️  Length {} is out of range, using {}", requested, clamped);
            }
            clamped
        }
        None => defaults.length,
    };

    PasswordConfig {
        length,
        include_digits: digits.unwrap_or(defaults.include_digits),
        include_symbols: symbols.unwrap_or(defaults.include_symbols),
    }
}

/// Print `count` passwords to `out`. With `copy`, the clipboard escape goes
/// to `tty` so it never mixes into the printed (possibly JSON) output.
pub fn handle_generate<R, W, T>(
    generator: &PasswordGenerator<R>,
    config: &PasswordConfig,
    count: usize,
    copy: bool,
    json: bool,
    out: &mut W,
    tty: &mut T,
) -> Result<Vec<GeneratedPassword>, Box<dyn Error>>
where
    R: RngCore + CryptoRng,
    W: Write,
    T: Write,
{
    let passwords = (0..count)
        .map(|_| generator.generate(config))
        .collect::<Result<Vec<_>, _>>()?;

    if json {
        let output = GenerateOutput {
            length: config.length,
            include_digits: config.include_digits,
            include_symbols: config.include_symbols,
            passwords: &passwords,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        for password in &passwords {
            writeln!(out, "{}", password)?;
        }
    }

    if copy {
        if let Some(last) = passwords.last() {
            copy_to_clipboard(tty, last.as_str())?;
            eprintln!("📋 Password copied to clipboard!");
        }
    }

    log::info!(
        "Generated {} password(s) of length {}",
        passwords.len(),
        config.length
    );

    Ok(passwords)
}
