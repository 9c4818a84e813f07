// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for accounts and migration status.

use acct_core::{Account, MigrationStatus};

/// Placeholder shown for a missing email.
const NO_EMAIL: &str = "-";

/// One account as a `id<TAB>email` line, as used by `list`.
pub fn format_account_line(account: &Account) -> String {
    format!(
        "{}\t{}",
        account.id,
        account.email.as_deref().unwrap_or(NO_EMAIL)
    )
}

/// Multi-line detail view used by `show`.
pub fn format_account_details(account: &Account) -> String {
    format!(
        "id: {}\nemail: {}\n",
        account.id,
        account.email.as_deref().unwrap_or(NO_EMAIL)
    )
}

/// One line per migration: version, name and when it was applied.
pub fn format_migration_status(status: &MigrationStatus) -> String {
    match status.applied_at {
        Some(at) => format!(
            "{:>4}  {}  applied {}",
            status.version,
            status.name,
            at.to_rfc3339()
        ),
        None => format!("{:>4}  {}  pending", status.version, status.name),
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
