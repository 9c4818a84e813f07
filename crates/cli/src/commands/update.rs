// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use acct_core::{Account, AccountId, Database};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::Context;

pub fn run(
    ctx: &Context,
    id: AccountId,
    email: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let mut db = ctx.open_db()?;
    let account = run_impl(&mut db, id, email)?;
    match format {
        OutputFormat::Text => println!("Updated account {account}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(&account)?),
    }
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, id: AccountId, email: Option<&str>) -> Result<Account> {
    let account = db.update_account_email(id, email)?;
    tracing::info!(id, cleared = email.is_none(), "account updated");
    Ok(account)
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
