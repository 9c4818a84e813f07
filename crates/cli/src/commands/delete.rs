// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use acct_core::{AccountId, Database};

use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, id: AccountId) -> Result<()> {
    let mut db = ctx.open_db()?;
    run_impl(&mut db, id)?;
    println!("Deleted account {id}");
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, id: AccountId) -> Result<()> {
    db.delete_account(id)?;
    tracing::info!(id, "account deleted");
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
