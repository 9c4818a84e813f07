// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Configuration is read from `$ACCT_CONFIG`, falling back to
//! `<config dir>/acct/config.toml`. The file is optional and includes:
//! - `database`: path to the SQLite database (relative paths resolve against
//!   the directory holding the config file)
//! - `busy_timeout_ms`: how long a write waits for a competing writer

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "acct";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "accounts.db";
const REDACTED: &str = "******";

/// Configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Path to the account database.
    #[serde(default)]
    pub database: Option<String>,
    /// Busy timeout in milliseconds (default: 5000).
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, returning defaults when the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        tracing::debug!(path = %path.display(), config = ?config.redacted(), "loaded config");
        Ok(config)
    }

    /// Copy safe to log: the database location is masked.
    pub fn redacted(&self) -> Config {
        Config {
            database: self.database.as_ref().map(|_| REDACTED.to_string()),
            ..self.clone()
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

/// Location of the config file, if one can be determined.
pub fn config_path() -> Option<PathBuf> {
    env::config_path().or_else(|| {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    })
}

/// Default database location under the platform's local data directory.
pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join(APP_DIR_NAME).join(DB_FILE_NAME))
}

/// Pick the database path.
///
/// Precedence: `flag`, then `env_db`, then the config's `database`, then
/// `fallback`.
pub fn resolve_db_path(
    flag: Option<&Path>,
    env_db: Option<PathBuf>,
    config: &Config,
    config_path: Option<&Path>,
    fallback: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env_db {
        return Ok(path);
    }
    if let Some(database) = &config.database {
        let database = Path::new(database);
        if database.is_absolute() {
            return Ok(database.to_path_buf());
        }
        let base = config_path
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."));
        return Ok(base.join(database));
    }
    fallback.ok_or(Error::NoDatabasePath)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
