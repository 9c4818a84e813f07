// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    duplicate_email = { Error::ConstraintViolation(Violation::DuplicateEmail("a@example.com".into())), "a@example.com" },
    too_long = { Error::ConstraintViolation(Violation::EmailTooLong { actual: 321, max: 320 }), "321" },
    contains_nul = { Error::ConstraintViolation(Violation::EmailContainsNul), "NUL" },
    account_not_found = { Error::AccountNotFound(42), "42" },
    email_not_found = { Error::EmailNotFound("b@example.com".into()), "b@example.com" },
    schema = { Error::SchemaApplication("version 9 is unknown".into()), "version 9" },
    corrupted = { Error::CorruptedData("invalid timestamp 'soon'".into()), "soon" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn constraint_violations_are_not_retryable() {
    let err = Error::ConstraintViolation(Violation::DuplicateEmail("a@example.com".into()));
    assert!(err.is_constraint_violation());
    assert!(!err.is_retryable());
    assert!(!err.is_not_found());
}

#[test]
fn not_found_is_not_a_constraint_violation() {
    let err = Error::AccountNotFound(1);
    assert!(err.is_not_found());
    assert!(!err.is_constraint_violation());
    assert!(!err.is_retryable());
}

#[test]
fn busy_database_is_retryable() {
    let err = Error::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
        None,
    ));
    assert!(err.is_retryable());
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}
