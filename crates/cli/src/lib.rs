// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! acctrs - operator CLI library for the account identity store.
//!
//! This crate provides the functionality behind the `acct` binary: config
//! and database path resolution, argument parsing and the commands that
//! drive [`acct_core::Database`].
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap argument definitions
//! - [`Config`] - optional TOML config (database path, busy timeout)
//! - [`Error`] - CLI errors with process exit codes
//!
//! Every command opens the database through [`acct_core::Database`], which
//! applies pending migrations first. A schema that cannot be applied aborts
//! the command with [`Error::SchemaApplication`] before any account is touched.

mod cli;
mod commands;
mod display;
mod env;

pub mod config;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command, EmailChangeArgs, OutputArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

/// Execute a parsed command line. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = commands::Context::resolve(cli.db.as_deref())?;

    match cli.command {
        Command::Migrate { status } => commands::migrate::run(&ctx, status),
        Command::Create { email, output } => {
            commands::create::run(&ctx, email.as_deref(), output.output)
        }
        Command::Show { id, email, output } => {
            commands::show::run(&ctx, id, email.as_deref(), output.output)
        }
        Command::Update { id, email, output } => {
            commands::update::run(&ctx, id, email.new_email(), output.output)
        }
        Command::Delete { id } => commands::delete::run(&ctx, id),
        Command::List { output } => commands::list::run(&ctx, output.output),
    }
}
