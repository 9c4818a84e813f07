// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed account store.
//!
//! The [`Database`] struct binds against the `account` table created by the
//! migrations in [`crate::migrate`]. Uniqueness and length of `email` are
//! enforced by the schema; this layer only translates the resulting SQLite
//! constraint failures into [`Violation`]s.

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use std::path::Path;
use std::time::Duration;

use crate::account::{Account, AccountId, MAX_EMAIL_LEN};
use crate::error::{Error, Result, Violation};
use crate::migrate::run_migrations;

/// Busy timeout applied when none is configured.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Map a failed write on `account` to a constraint violation where applicable.
fn classify_write_error(err: rusqlite::Error, email: Option<&str>) -> Error {
    if let rusqlite::Error::SqliteFailure(ref failure, _) = err {
        match failure.extended_code {
            rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE => {
                return Error::ConstraintViolation(Violation::DuplicateEmail(
                    email.unwrap_or_default().to_string(),
                ));
            }
            rusqlite::ffi::SQLITE_CONSTRAINT_CHECK => {
                return Error::ConstraintViolation(Violation::EmailTooLong {
                    actual: email.map(Account::email_len).unwrap_or_default(),
                    max: MAX_EMAIL_LEN,
                });
            }
            _ => {}
        }
    }
    Error::Database(err)
}

/// SQLite's `length()` and text comparison stop at a NUL, so such emails
/// never reach the schema constraints.
fn check_email(email: Option<&str>) -> Result<()> {
    match email {
        Some(email) if email.contains('\0') => {
            Err(Error::ConstraintViolation(Violation::EmailContainsNul))
        }
        _ => Ok(()),
    }
}

fn account_from_row(row: &rusqlite::Row<'_>) -> std::result::Result<Account, rusqlite::Error> {
    Ok(Account {
        id: row.get(0)?,
        email: row.get(1)?,
    })
}

/// SQLite database connection with account operations.
pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Open a database at the given path with an explicit busy timeout.
    pub fn open_with(path: &Path, busy_timeout: Duration) -> Result<Self> {
        Self::open_and_migrate(path, busy_timeout).map(|(db, _)| db)
    }

    /// Open a database and also report which migration versions this open applied.
    pub fn open_and_migrate(path: &Path, busy_timeout: Duration) -> Result<(Self, Vec<i64>)> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        // journal_mode returns a row, so it can't go through execute_batch
        let _mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;

        let applied = run_migrations(&mut conn)?;
        tracing::debug!(path = %path.display(), "opened account database");
        Ok((Database { conn }, applied))
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        run_migrations(&mut conn)?;
        Ok(Database { conn })
    }

    /// Create an account. The id is assigned by SQLite.
    pub fn create_account(&mut self, email: Option<&str>) -> Result<Account> {
        check_email(email)?;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let account = tx
            .query_row(
                "INSERT INTO account (email) VALUES (?1) RETURNING id, email",
                params![email],
                account_from_row,
            )
            .map_err(|e| classify_write_error(e, email))
            .inspect_err(|e| tracing::debug!(error = %e, "create rejected"))?;

        tx.commit()?;
        tracing::debug!(id = account.id, "created account");
        Ok(account)
    }

    /// Get an account by id.
    pub fn get_account(&self, id: AccountId) -> Result<Account> {
        let account = self
            .conn
            .query_row(
                "SELECT id, email FROM account WHERE id = ?1",
                params![id],
                account_from_row,
            )
            .optional()?;

        account.ok_or(Error::AccountNotFound(id))
    }

    /// Find the account holding an email, compared with the column's NOCASE collation.
    pub fn find_account_by_email(&self, email: &str) -> Result<Account> {
        let account = self
            .conn
            .query_row(
                "SELECT id, email FROM account WHERE email = ?1",
                params![email],
                account_from_row,
            )
            .optional()?;

        account.ok_or_else(|| Error::EmailNotFound(email.to_string()))
    }

    /// Check if an account exists.
    pub fn account_exists(&self, id: AccountId) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM account WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Replace (or clear) an account's email.
    pub fn update_account_email(
        &mut self,
        id: AccountId,
        email: Option<&str>,
    ) -> Result<Account> {
        check_email(email)?;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let account = tx
            .query_row(
                "UPDATE account SET email = ?1 WHERE id = ?2 RETURNING id, email",
                params![email, id],
                account_from_row,
            )
            .optional()
            .map_err(|e| classify_write_error(e, email))
            .inspect_err(|e| tracing::debug!(id, error = %e, "update rejected"))?
            .ok_or(Error::AccountNotFound(id))?;

        tx.commit()?;
        tracing::debug!(id, "updated account");
        Ok(account)
    }

    /// Delete an account. Its id is never handed out again.
    pub fn delete_account(&mut self, id: AccountId) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let affected = tx.execute("DELETE FROM account WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::AccountNotFound(id));
        }

        tx.commit()?;
        tracing::debug!(id, "deleted account");
        Ok(())
    }

    /// List all accounts, oldest first.
    pub fn list_accounts(&self) -> Result<Vec<Account>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, email FROM account ORDER BY id")?;

        let accounts = stmt
            .query_map([], account_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(accounts)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
