//! Runtime configuration
//!
//! ## Configuration Sources
//! Values are resolved in this order, later sources winning:
//! 1. Built-in defaults
//! 2. `.env` file in the current directory or parent directories (if present)
//! 3. System environment variables
//! 4. Command line flags
//!
//! ## Variables
//! - `ROSTER_DATA_FILE`: roster file path (default `./data/roster.jsonl`)
//! - `ROSTER_FORMAT`: `json` or `binary` (default `json`)
//! - `ROSTER_LOG_LEVEL`: trace, debug, info, warn, error (default `info`)
//! - `ROSTER_TODAY`: pin the reference date as `DD-MM-YYYY` (default: system date)

use std::path::PathBuf;

use chrono::NaiveDate;
use shared::dates::parse_date;

use crate::error::{RosterError, RosterResult};
use crate::services::{FileStore, StoreFormat};

pub const DATA_FILE_VAR: &str = "ROSTER_DATA_FILE";
pub const FORMAT_VAR: &str = "ROSTER_FORMAT";
pub const LOG_LEVEL_VAR: &str = "ROSTER_LOG_LEVEL";
pub const TODAY_VAR: &str = "ROSTER_TODAY";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Resolved settings for a roster session
#[derive(Debug, Clone, PartialEq)]
pub struct RosterConfig {
    pub data_file: PathBuf,
    pub format: StoreFormat,
    pub log_level: String,
    /// Reference date override; `None` means the system clock
    pub today: Option<NaiveDate>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/roster.jsonl"),
            format: StoreFormat::Json,
            log_level: "info".to_string(),
            today: None,
        }
    }
}

/// Command line values that override the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_file: Option<PathBuf>,
    pub format: Option<String>,
    pub log_level: Option<String>,
    pub today: Option<String>,
}

impl RosterConfig {
    /// Load from `.env` and the process environment
    pub fn from_env() -> RosterResult<Self> {
        // Silently ignored when no .env file is present
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> RosterResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().apply(ConfigOverrides {
            data_file: lookup(DATA_FILE_VAR).map(PathBuf::from),
            format: lookup(FORMAT_VAR),
            log_level: lookup(LOG_LEVEL_VAR),
            today: lookup(TODAY_VAR),
        })
    }

    /// Layer overrides on top of this configuration
    pub fn apply(mut self, overrides: ConfigOverrides) -> RosterResult<Self> {
        if let Some(data_file) = overrides.data_file {
            self.data_file = data_file;
        }
        if let Some(format) = overrides.format {
            self.format = format.parse()?;
        }
        if let Some(level) = overrides.log_level {
            let level = level.to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(RosterError::config("log_level", level));
            }
            self.log_level = level;
        }
        if let Some(today) = overrides.today {
            let date = parse_date(&today).map_err(|_| RosterError::config("today", today.clone()))?;
            self.today = Some(date);
        }
        Ok(self)
    }

    /// File store described by this configuration
    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_file.clone(), self.format)
    }
}
