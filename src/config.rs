//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::book::UPCOMING_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// File the address book is stored in when nothing else is configured.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted address book (default: "addressbook.json")
    pub book_path: PathBuf,

    /// Days after today the `birthdays` command looks ahead (default: 7)
    pub upcoming_days: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_BOOK_PATH`: address book file (default: "addressbook.json")
    /// - `UPCOMING_BIRTHDAY_DAYS`: look-ahead window in days, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ASSISTANT_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ASSISTANT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let upcoming_days = Self::parse_env_u64("UPCOMING_BIRTHDAY_DAYS", UPCOMING_WINDOW_DAYS)?;
        if upcoming_days > 366 {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAY_DAYS".to_string(),
                reason: "Must be between 0 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            upcoming_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            upcoming_days: UPCOMING_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
