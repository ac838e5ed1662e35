// src/cli/menu.rs
use inquire::{InquireError, Select, Text};
use std::error::Error;
use std::io;
use std::sync::Arc;

use console::style;

use crate::core::{GeneratorSession, LengthInput};
use crate::generators::PasswordGenerator;
use crate::models::PasswordConfig;
use crate::utils::copy_to_clipboard;

const COPY: &str = "📋  Copy password";
const REGENERATE: &str = "🔄  Regenerate";
const LENGTH: &str = "📏  Change length";
const DIGITS: &str = "🔢  Toggle numbers";
const SYMBOLS: &str = "🔣  Toggle characters";
const EXIT: &str = "🚪  Exit";

fn on_off(enabled: bool) -> String {
    if enabled {
        style("on").green().to_string()
    } else {
        style("off").red().to_string()
    }
}

fn render(session: &GeneratorSession) {
    let config = session.config();
    println!();
    println!("🔐 {}", style(session.password()).bold().cyan());
    println!(
        "   Length: {}   Numbers: {}   Characters: {}",
        style(config.length).bold(),
        on_off(config.include_digits),
        on_off(config.include_symbols)
    );
    if session.is_copied() {
        println!("   {}", style("Password copied to clipboard!").blue());
    }
}

/// Backing out of the length prompt counts as an empty field, so the
/// current length and password stay as they are.
fn length_entry(answer: Result<String, InquireError>) -> Result<String, InquireError> {
    match answer {
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(String::new())
        }
        other => other,
    }
}

pub fn run_cli_menu(
    generator: Arc<PasswordGenerator>,
    config: PasswordConfig,
    copy_feedback: std::time::Duration,
) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 PASSWORD GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = GeneratorSession::new(generator, config, copy_feedback)?;

    loop {
        render(&session);

        let options = vec![COPY, REGENERATE, LENGTH, DIGITS, SYMBOLS, EXIT];
        let choice = match Select::new("What would you like to do?", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled)
            | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        match choice {
            COPY => {
                let password = session.copy().to_string();
                copy_to_clipboard(&mut io::stdout(), &password)?;
            }
            REGENERATE => {
                session.regenerate()?;
            }
            LENGTH => {
                let current = session.config().length.to_string();
                let input = length_entry(
                    Text::new("Length (6-100):")
                        .with_placeholder(&current)
                        .prompt(),
                )?;

                match session.set_length_input(&input)? {
                    LengthInput::Applied(length) => log::debug!("Length set to {}", length),
                    LengthInput::Pending => println!("Length left unchanged."),
                    LengthInput::Rejected => {
                        println!("❌ '{}' is not a number.", input.trim())
                    }
                }
            }
            DIGITS => {
                session.toggle_digits()?;
            }
            SYMBOLS => {
                session.toggle_symbols()?;
            }
            EXIT => break,
            _ => {}
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
