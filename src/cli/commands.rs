// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate password(s) and print them
    Generate {
        /// Password length (clamped to 6..=100)
        #[arg(long, short, allow_negative_numbers = true)]
        length: Option<i64>,

        /// Include digits, overriding DEFAULT_INCLUDE_DIGITS
        #[arg(long, overrides_with = "no_digits")]
        digits: bool,

        /// Leave digits out of the alphabet
        #[arg(long, overrides_with = "digits")]
        no_digits: bool,

        /// Include symbols, overriding DEFAULT_INCLUDE_SYMBOLS
        #[arg(long, overrides_with = "no_symbols")]
        symbols: bool,

        /// Leave symbols out of the alphabet
        #[arg(long, overrides_with = "symbols")]
        no_symbols: bool,

        /// Number of passwords to generate (1-1000)
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1000))]
        count: u32,

        /// Copy the last password to the clipboard via the terminal
        #[arg(long)]
        copy: bool,

        /// Print JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },

    /// Interactive generator that regenerates on every change
    Interactive,

    /// Run the HTTP API
    Serve {
        /// API server port
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long)]
        address: Option<String>,
    },
}
