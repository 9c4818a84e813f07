// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The account record.
//!
//! An [`Account`] is a storage-assigned integer id plus an optional email.
//! The constraints on `email` live in the schema itself; this module only
//! carries the shape of a row and the limit the schema enforces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the storage engine on insert.
pub type AccountId = i64;

/// Maximum email length in characters, enforced by a `CHECK` constraint.
pub const MAX_EMAIL_LEN: usize = 320;

/// A persisted account row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub email: Option<String>,
}

impl Account {
    /// Length of `email` as SQLite's `length()` counts it for text values.
    pub fn email_len(email: &str) -> usize {
        email.chars().count()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} <{}>", self.id, email),
            None => write!(f, "{} (no email)", self.id),
        }
    }
}

#[cfg(test)]
#[path = "account_tests.rs"]
mod tests;
