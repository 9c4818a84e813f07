// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use args::{EmailChangeArgs, OutputArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "acct")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage the account identity store")]
#[command(
    long_about = "Manage the account identity store.\n\n\
    Accounts have a storage-assigned id and an optional email that is unique \
    (ignoring ASCII case) and at most 320 characters long."
)]
pub struct Cli {
    /// Path to the account database (overrides ACCT_DB and the config file)
    #[arg(long, global = true, value_name = "path")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply pending schema migrations
    Migrate {
        /// Show applied and pending migrations without changing anything
        #[arg(long)]
        status: bool,
    },

    /// Create an account
    #[command(after_help = "\
Examples:
  acct create --email a@example.com     Create an account with an email
  acct create                           Create an account without an email")]
    Create {
        /// Email address (optional)
        #[arg(long, short, value_parser = non_empty_string)]
        email: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show an account by id or email
    #[command(arg_required_else_help = true)]
    Show {
        /// Account id
        #[arg(required_unless_present = "email", conflicts_with = "email")]
        id: Option<i64>,

        /// Look the account up by email instead of id
        #[arg(long, short)]
        email: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Change or clear an account's email
    #[command(after_help = "\
Examples:
  acct update 1 --email b@example.com   Replace the email of account 1
  acct update 1 --clear-email           Remove the email of account 1")]
    Update {
        /// Account id
        id: i64,

        #[command(flatten)]
        email: EmailChangeArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delete an account
    #[command(arg_required_else_help = true)]
    Delete {
        /// Account id
        id: i64,
    },

    /// List all accounts
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
}
