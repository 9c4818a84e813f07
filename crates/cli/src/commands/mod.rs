// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod create;
pub mod delete;
pub mod list;
pub mod migrate;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod update;

use std::path::{Path, PathBuf};
use std::time::Duration;

use acct_core::{Account, Database};

use crate::cli::OutputFormat;
use crate::config::{self, Config};
use crate::display::format_account_details;
use crate::env;
use crate::error::Result;

/// Where the database lives and how to open it, resolved once per invocation.
#[derive(Debug, Clone)]
pub struct Context {
    pub db_path: PathBuf,
    pub busy_timeout: Duration,
}

impl Context {
    /// Resolve the database path from the flag, environment and config file.
    pub fn resolve(db_flag: Option<&Path>) -> Result<Self> {
        let config_path = config::config_path();
        let config = match &config_path {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        let db_path = config::resolve_db_path(
            db_flag,
            env::database_path(),
            &config,
            config_path.as_deref(),
            config::default_db_path(),
        )?;
        tracing::debug!(
            busy_timeout_ms = config.busy_timeout_ms,
            "resolved database location"
        );

        Ok(Context {
            db_path,
            busy_timeout: config.busy_timeout(),
        })
    }

    /// Open the database, applying any pending migrations first.
    pub fn open_db(&self) -> Result<Database> {
        Ok(Database::open_with(&self.db_path, self.busy_timeout)?)
    }
}

/// Print a single account in the requested format.
pub(crate) fn print_account(account: &Account, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_account_details(account)),
        // Use to_string (not to_string_pretty) for JSONL format
        OutputFormat::Json => println!("{}", serde_json::to_string(account)?),
    }
    Ok(())
}
