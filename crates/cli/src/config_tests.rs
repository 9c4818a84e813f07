// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.busy_timeout(), Duration::from_millis(5000));
}

#[test]
fn test_load_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "database = \"data/accounts.db\"\nbusy_timeout_ms = 250\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(
        config,
        Config {
            database: Some("data/accounts.db".into()),
            busy_timeout_ms: 250,
        }
    );
    assert_eq!(config.busy_timeout(), Duration::from_millis(250));
}

#[test]
fn test_redacted_masks_database() {
    let config = Config {
        database: Some("/srv/secret/accounts.db".into()),
        busy_timeout_ms: 250,
    };
    let redacted = config.redacted();
    assert_eq!(redacted.database.as_deref(), Some("******"));
    assert_eq!(redacted.busy_timeout_ms, 250);
    assert!(!format!("{:?}", redacted).contains("secret"));
}

#[test]
fn test_redacted_without_database() {
    assert_eq!(Config::default().redacted(), Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "database = \"/srv/accounts.db\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.database.as_deref(), Some("/srv/accounts.db"));
    assert_eq!(config.busy_timeout_ms, 5000);
}

#[test]
fn test_invalid_file_is_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "busy_timeout_ms = \"soon\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(ref msg) if msg.contains("parse")));
}

#[test]
fn test_flag_wins() {
    let config = Config {
        database: Some("/from/config.db".into()),
        ..Config::default()
    };
    let path = resolve_db_path(
        Some(Path::new("/from/flag.db")),
        Some(PathBuf::from("/from/env.db")),
        &config,
        None,
        None,
    )
    .unwrap();
    assert_eq!(path, PathBuf::from("/from/flag.db"));
}

#[test]
fn test_env_beats_config() {
    let config = Config {
        database: Some("/from/config.db".into()),
        ..Config::default()
    };
    let path =
        resolve_db_path(None, Some(PathBuf::from("/from/env.db")), &config, None, None).unwrap();
    assert_eq!(path, PathBuf::from("/from/env.db"));
}

#[test]
fn test_relative_config_path_resolves_against_config_dir() {
    let config = Config {
        database: Some("data/accounts.db".into()),
        ..Config::default()
    };
    let path = resolve_db_path(
        None,
        None,
        &config,
        Some(Path::new("/etc/acct/config.toml")),
        None,
    )
    .unwrap();
    assert_eq!(path, PathBuf::from("/etc/acct/data/accounts.db"));
}

#[test]
fn test_fallback_used_last() {
    let path = resolve_db_path(
        None,
        None,
        &Config::default(),
        None,
        Some(PathBuf::from("/home/u/.local/share/acct/accounts.db")),
    )
    .unwrap();
    assert_eq!(path, PathBuf::from("/home/u/.local/share/acct/accounts.db"));
}

#[test]
fn test_no_location_is_an_error() {
    let err = resolve_db_path(None, None, &Config::default(), None, None).unwrap_err();
    assert!(matches!(err, Error::NoDatabasePath));
}
