// src/core/mod.rs
pub mod config;
pub mod session;

pub use config::Config;
pub use session::{clamp_length, GeneratorSession, LengthInput};
