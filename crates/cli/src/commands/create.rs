// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use acct_core::{Account, Database};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, email: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut db = ctx.open_db()?;
    let account = run_impl(&mut db, email)?;
    match format {
        OutputFormat::Text => println!("Created account {account}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(&account)?),
    }
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, email: Option<&str>) -> Result<Account> {
    let account = db.create_account(email)?;
    tracing::info!(id = account.id, "account created");
    Ok(account)
}

#[cfg(test)]
#[path = "create_tests.rs"]
mod tests;
