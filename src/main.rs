use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rust_passgen::api::{self, AppState};
use rust_passgen::cli::{self, Args, CliCommand};
use rust_passgen::core::Config;
use rust_passgen::generators::PasswordGenerator;
use rust_passgen::logging;

fn parse_level(level: &str) -> Option<log::LevelFilter> {
    level.parse().ok()
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    if let Some(level) = args.log_level.as_deref().and_then(parse_level) {
        config.log_level = level;
    }
    if let Some(file) = &args.log_file {
        config.log_file = Some(PathBuf::from(file));
    }

    if let Err(e) = logging::init(config.log_level, config.log_file.as_deref()) {
        eprintln!("⚠️  Failed to initialize logging: {}", e);
    }
    log::debug!("Loaded config: {:?}", config);

    // The random source is opened once and shared by every caller.
    let generator = Arc::new(PasswordGenerator::new());

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Generate {
            length,
            digits,
            no_digits,
            symbols,
            no_symbols,
            count,
            copy,
            json,
        } => {
            let password_config = cli::handlers::resolve_config(
                &config.default_password,
                length,
                cli::handlers::flag_override(digits, no_digits),
                cli::handlers::flag_override(symbols, no_symbols),
            );
            let mut stdout = io::stdout();
            if let Err(e) = cli::handlers::handle_generate(
                generator.as_ref(),
                &password_config,
                count as usize,
                copy,
                json,
                &mut stdout,
                &mut io::stderr(),
            ) {
                log::error!("Generation failed: {}", e);
                eprintln!("❌ Failed to generate password: {}", e);
                std::process::exit(1);
            }
        }
        CliCommand::Interactive => {
            // Prompts catch Ctrl+C themselves; this covers the gaps between them.
            if let Err(e) = ctrlc::set_handler(|| {
                log::info!("Ctrl+C received, shutting down");
                println!("\n👋 Goodbye!");
                std::process::exit(0);
            }) {
                log::warn!("Failed to set Ctrl+C handler: {}", e);
            }

            cli::menu::run_cli_menu(generator, config.default_password, config.copy_feedback)
            .map_err(|e| {
                log::error!("CLI menu error: {}", e);
                io::Error::new(io::ErrorKind::Other, e.to_string())
            })?;
        }
        CliCommand::Serve { port, address } => {
            let port = port.unwrap_or(config.web_port);
            let address = address.unwrap_or_else(|| config.web_address.clone());
            println!("🚀 API server listening on http://{}:{}", address, port);
            println!("   Docs: http://{}:{}/swagger-ui/", address, port);

            let state = AppState {
                generator,
                defaults: config.default_password,
            };
            api::start_server(state, &address, port).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
        }
    }

    Ok(())
}
