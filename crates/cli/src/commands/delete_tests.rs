// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::run_impl;
use crate::commands::testing::TestContext;
use crate::error::Error;

#[test]
fn test_delete_then_missing() {
    let mut ctx = TestContext::new();
    let account = ctx.create(Some("a@example.com"));

    run_impl(&mut ctx.db, account.id).unwrap();
    assert!(!ctx.db.account_exists(account.id).unwrap());

    let err = run_impl(&mut ctx.db, account.id).unwrap_err();
    assert!(matches!(err, Error::AccountNotFound(id) if id == account.id));
}

#[test]
fn test_delete_frees_email_but_not_id() {
    let mut ctx = TestContext::new();
    let account = ctx.create(Some("a@example.com"));
    run_impl(&mut ctx.db, account.id).unwrap();

    let again = ctx.create(Some("a@example.com"));
    assert!(again.id > account.id);
}
