// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{TimeZone, Utc};
use yare::parameterized;

#[parameterized(
    with_email = { Account { id: 1, email: Some("a@example.com".into()) }, "1\ta@example.com" },
    without_email = { Account { id: 2, email: None }, "2\t-" },
)]
fn account_line(account: Account, expected: &str) {
    assert_eq!(format_account_line(&account), expected);
}

#[test]
fn account_details() {
    let account = Account {
        id: 7,
        email: Some("b@example.com".into()),
    };
    assert_eq!(
        format_account_details(&account),
        "id: 7\nemail: b@example.com\n"
    );
}

#[test]
fn migration_status_pending() {
    let status = MigrationStatus {
        version: 1,
        name: "create_account".into(),
        applied_at: None,
    };
    assert_eq!(
        format_migration_status(&status),
        "   1  create_account  pending"
    );
}

#[test]
fn migration_status_applied() {
    let status = MigrationStatus {
        version: 1,
        name: "create_account".into(),
        applied_at: Some(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()),
    };
    let line = format_migration_status(&status);
    assert!(line.contains("applied 2026-01-02T03:04:05"));
}
