// src/utils/mod.rs
mod clipboard;

pub use clipboard::*;
