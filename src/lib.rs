//! Random password generation from a configurable character alphabet.
//!
//! ```
//! use rust_passgen::generators::PasswordGenerator;
//! use rust_passgen::models::PasswordConfig;
//!
//! let generator = PasswordGenerator::new();
//! let password = generator.generate(&PasswordConfig::new(16, true, false)).unwrap();
//! assert_eq!(password.len(), 16);
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;
