// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::core::session::clamp_length;
use crate::models::PasswordConfig;

// Configuration for the generator application
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password: PasswordConfig,

    // Controller feedback
    pub copy_feedback: Duration,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password: PasswordConfig::default(),

            // Controller feedback
            copy_feedback: Duration::from_millis(3000),

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, starting from defaults.
    /// Unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<i64>() {
                Ok(length) => {
                    let clamped = clamp_length(length);
                    if clamped as i64 != length {
                        log::warn!(
                            "DEFAULT_PASSWORD_LENGTH {} out of range, using {}",
                            length,
                            clamped
                        );
                    }
                    config.default_password.length = clamped;
                }
                Err(_) => log::warn!("Invalid DEFAULT_PASSWORD_LENGTH '{}', ignoring", val),
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_DIGITS") {
            match parse_bool(&val) {
                Some(include) => config.default_password.include_digits = include,
                None => log::warn!("Invalid DEFAULT_INCLUDE_DIGITS '{}', ignoring", val),
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_SYMBOLS") {
            match parse_bool(&val) {
                Some(include) => config.default_password.include_symbols = include,
                None => log::warn!("Invalid DEFAULT_INCLUDE_SYMBOLS '{}', ignoring", val),
            }
        }

        if let Some(val) = lookup("COPY_FEEDBACK_MS") {
            if let Ok(ms) = val.trim().parse::<u64>() {
                config.copy_feedback = Duration::from_millis(ms);
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            if let Ok(port) = val.trim().parse() {
                config.web_port = port;
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.default_password, PasswordConfig::default());
        assert_eq!(config.copy_feedback, Duration::from_millis(3000));
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.web_address, "127.0.0.1");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_INCLUDE_DIGITS", "false"),
            ("DEFAULT_INCLUDE_SYMBOLS", "no"),
            ("COPY_FEEDBACK_MS", "500"),
            ("WEB_PORT", "8080"),
            ("WEB_ADDRESS", "0.0.0.0"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "logs/passgen.log"),
        ]);
        assert_eq!(config.default_password, PasswordConfig::new(24, false, false));
        assert_eq!(config.copy_feedback, Duration::from_millis(500));
        assert_eq!(config.web_port, 8080);
        assert_eq!(config.web_address, "0.0.0.0");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/passgen.log")));
    }

    #[test]
    fn test_default_length_is_clamped() {
        assert_eq!(config_from(&[("DEFAULT_PASSWORD_LENGTH", "2")]).default_password.length, 6);
        assert_eq!(config_from(&[("DEFAULT_PASSWORD_LENGTH", "500")]).default_password.length, 100);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "twelve"),
            ("DEFAULT_INCLUDE_DIGITS", "maybe"),
            ("WEB_PORT", "99999"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.default_password, PasswordConfig::default());
        assert_eq!(config.web_port, 5000);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
