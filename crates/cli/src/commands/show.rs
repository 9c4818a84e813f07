// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use acct_core::{Account, AccountId, Database};

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

use super::{print_account, Context};

pub fn run(
    ctx: &Context,
    id: Option<AccountId>,
    email: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let db = ctx.open_db()?;
    let account = run_impl(&db, id, email)?;
    print_account(&account, format)
}

/// Internal implementation that accepts db for testing.
///
/// Exactly one of `id` or `email` is expected; clap enforces this.
pub(crate) fn run_impl(
    db: &Database,
    id: Option<AccountId>,
    email: Option<&str>,
) -> Result<Account> {
    match (id, email) {
        (Some(id), _) => Ok(db.get_account(id)?),
        (None, Some(email)) => Ok(db.find_account_by_email(email)?),
        (None, None) => Err(Error::FieldRequired {
            field: "An account id or --email",
        }),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
