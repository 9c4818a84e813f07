// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for acct-core operations.

use thiserror::Error;

use crate::account::AccountId;

/// A write rejected by a storage-level constraint on the `account` table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("email already in use: {0}")]
    DuplicateEmail(String),

    #[error("email too long ({actual} chars, max {max})")]
    EmailTooLong { actual: usize, max: usize },

    #[error("email contains a NUL character")]
    EmailContainsNul,
}

/// All possible errors that can occur in acct-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("constraint violation: {0}")]
    ConstraintViolation(Violation),

    #[error("account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("no account with email: {0}")]
    EmailNotFound(String),

    #[error("schema application failed: {0}\n  hint: the database and this build disagree; refusing to continue")]
    SchemaApplication(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// True for not-found outcomes, which callers treat as normal results.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::AccountNotFound(_) | Error::EmailNotFound(_))
    }

    /// True when the input itself was rejected and must change before resubmitting.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Error::ConstraintViolation(_))
    }

    /// Whether repeating the same call could succeed.
    ///
    /// Only a busy or locked database qualifies; constraint violations,
    /// not-found and schema failures are final for the given input.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Database(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

/// A specialized Result type for acct-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
