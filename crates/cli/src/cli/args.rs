// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;

use super::{non_empty_string, OutputFormat};

/// Output format selection for commands that print accounts.
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// The new email for an update: either a value or an explicit clear.
#[derive(Args, Clone, Debug, Default)]
#[group(required = true, multiple = false)]
pub struct EmailChangeArgs {
    /// New email address
    #[arg(long, short, value_parser = non_empty_string)]
    pub email: Option<String>,

    /// Remove the account's email
    #[arg(long)]
    pub clear_email: bool,
}

impl EmailChangeArgs {
    /// The email to store; `None` when clearing.
    pub fn new_email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
