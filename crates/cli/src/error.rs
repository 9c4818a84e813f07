// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the acctrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("account not found: {0}")]
    AccountNotFound(i64),

    #[error("no account with email '{0}'")]
    EmailNotFound(String),

    #[error("email already in use: {0}\n  hint: emails are unique and compared ignoring ASCII case")]
    EmailInUse(String),

    #[error("email too long ({actual} chars, max {max})")]
    EmailTooLong { actual: usize, max: usize },

    #[error("email contains a NUL character")]
    EmailContainsNul,

    #[error("schema application failed: {0}")]
    SchemaApplication(String),

    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("cannot determine database location\n  hint: pass --db <path> or set ACCT_DB")]
    NoDatabasePath,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data in database: {0}")]
    CorruptedData(String),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// 2 means the input must change (not found, constraint violation);
    /// 3 means the schema could not be applied and nothing was attempted.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::AccountNotFound(_)
            | Error::EmailNotFound(_)
            | Error::EmailInUse(_)
            | Error::EmailTooLong { .. }
            | Error::EmailContainsNul => 2,
            Error::SchemaApplication(_) => 3,
            _ => 1,
        }
    }
}

/// A specialized Result type for acctrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<acct_core::Error> for Error {
    fn from(e: acct_core::Error) -> Self {
        match e {
            acct_core::Error::ConstraintViolation(acct_core::Violation::DuplicateEmail(email)) => {
                Error::EmailInUse(email)
            }
            acct_core::Error::ConstraintViolation(acct_core::Violation::EmailTooLong {
                actual,
                max,
            }) => Error::EmailTooLong { actual, max },
            acct_core::Error::ConstraintViolation(acct_core::Violation::EmailContainsNul) => {
                Error::EmailContainsNul
            }
            acct_core::Error::AccountNotFound(id) => Error::AccountNotFound(id),
            acct_core::Error::EmailNotFound(email) => Error::EmailNotFound(email),
            acct_core::Error::SchemaApplication(reason) => Error::SchemaApplication(reason),
            acct_core::Error::Database(e) => Error::Database(e),
            acct_core::Error::Io(e) => Error::Io(e),
            acct_core::Error::CorruptedData(s) => Error::CorruptedData(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
