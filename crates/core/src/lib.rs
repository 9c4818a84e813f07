// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! acct-core: account identity store.
//!
//! This crate provides the account record, the embedded schema migrations
//! and the SQLite-backed [`Database`] used by the acct CLI. Integrity rules
//! (unique email, 320-character limit, never-reused ids) are enforced by the
//! schema, and surface here as [`Error::ConstraintViolation`].

pub mod account;
pub mod db;
pub mod error;
pub mod migrate;

pub use account::{Account, AccountId, MAX_EMAIL_LEN};
pub use db::{Database, DEFAULT_BUSY_TIMEOUT};
pub use error::{Error, Result, Violation};
pub use migrate::{migration_status, run_migrations, Migration, MigrationStatus, MIGRATIONS};
