// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A bare `acct` command isolated from the user's config and environment.
pub fn acct_in(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("acct");
    cmd.env("ACCT_CONFIG", temp.path().join("no-config.toml"))
        .env_remove("ACCT_DB")
        .env_remove("RUST_LOG")
        .current_dir(temp.path());
    cmd
}

/// Path of the database used by [`acct`].
pub fn db_path(temp: &TempDir) -> PathBuf {
    temp.path().join("accounts.db")
}

/// An `acct` command bound to the temp directory's database.
pub fn acct(temp: &TempDir) -> Command {
    let mut cmd = acct_in(temp);
    cmd.arg("--db").arg(db_path(temp));
    cmd
}

/// Helper to create an account and return its id.
pub fn create_account(temp: &TempDir, email: Option<&str>) -> i64 {
    let mut cmd = acct(temp);
    cmd.arg("create").arg("-o").arg("json");
    if let Some(email) = email {
        cmd.arg("--email").arg(email);
    }
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "create failed: {:?}", output);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    value["id"].as_i64().unwrap()
}
