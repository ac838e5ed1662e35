// src/utils/clipboard.rs
use std::io::{self, Write};
use base64::{engine::general_purpose, Engine as _};

/// Build the OSC 52 escape sequence that asks the terminal to place `text`
/// on the system clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", general_purpose::STANDARD.encode(text.as_bytes()))
}

/// Copy `text` to the clipboard through the terminal.
///
/// Works over SSH and inside multiplexers that forward OSC 52; terminals that
/// ignore the sequence leave the clipboard untouched without error.
pub fn copy_to_clipboard<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}
