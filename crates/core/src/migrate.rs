// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Versioned schema migrations.
//!
//! Migrations are embedded in the binary and applied in version order, each
//! exactly once. Applied migrations are recorded in a `schema_migrations`
//! ledger together with a SHA-256 checksum of their SQL. A database whose
//! ledger disagrees with the embedded list (unknown versions, edited
//! migrations) or whose `account` table has the wrong shape is rejected with
//! [`Error::SchemaApplication`].

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, TransactionBehavior};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// A single embedded schema change.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub sql: &'static str,
}

impl Migration {
    /// Lowercase hex SHA-256 of the migration SQL.
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(self.sql.as_bytes()))
    }
}

/// All migrations known to this build, in strictly increasing version order.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_account",
    sql: include_str!("migrations/0001_create_account.sql"),
}];

const LEDGER_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    checksum TEXT NOT NULL,
    applied_at TEXT NOT NULL
);
"#;

/// Whether an embedded migration has been applied to a database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationStatus {
    pub version: i64,
    pub name: String,
    pub applied_at: Option<DateTime<Utc>>,
}

impl MigrationStatus {
    pub fn is_applied(&self) -> bool {
        self.applied_at.is_some()
    }
}

/// A row of the `schema_migrations` ledger.
#[derive(Debug, Clone)]
struct LedgerEntry {
    version: i64,
    name: String,
    checksum: String,
    applied_at: DateTime<Utc>,
}

fn parse_applied_at(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            Error::CorruptedData(format!(
                "invalid timestamp '{value}' in column 'applied_at'"
            ))
        })
}

fn ledger_exists(conn: &Connection) -> Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = 'schema_migrations'",
        [],
        |row| row.get(0),
    )?;
    Ok(exists)
}

fn read_ledger(conn: &Connection) -> Result<Vec<LedgerEntry>> {
    let mut stmt = conn.prepare(
        "SELECT version, name, checksum, applied_at FROM schema_migrations ORDER BY version",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(version, name, checksum, applied_str)| {
            Ok(LedgerEntry {
                version,
                name,
                checksum,
                applied_at: parse_applied_at(&applied_str)?,
            })
        })
        .collect()
}

/// Check that every ledger entry matches an embedded migration.
fn validate_ledger(entries: &[LedgerEntry], migrations: &[Migration]) -> Result<()> {
    for entry in entries {
        let Some(migration) = migrations.iter().find(|m| m.version == entry.version) else {
            return Err(Error::SchemaApplication(format!(
                "database has migration {} ({}) which this build does not know; it was written by a newer version",
                entry.version, entry.name
            )));
        };

        if entry.name != migration.name || entry.checksum != migration.checksum() {
            return Err(Error::SchemaApplication(format!(
                "migration {} ({}) was modified after it was applied",
                migration.version, migration.name
            )));
        }
    }
    Ok(())
}

/// Check the live `account` table against what the data layer binds to.
fn verify_account_shape(conn: &Connection) -> Result<()> {
    let mismatch = |reason: &str| Error::SchemaApplication(format!("table 'account' {reason}"));

    let mut stmt = conn.prepare("SELECT name, type, pk FROM pragma_table_info('account')")?;
    let columns = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if columns.is_empty() {
        return Err(mismatch("is missing"));
    }

    let id_ok = columns
        .iter()
        .any(|(name, ty, pk)| name == "id" && ty.eq_ignore_ascii_case("INTEGER") && *pk == 1);
    if !id_ok {
        return Err(mismatch("has no INTEGER PRIMARY KEY column 'id'"));
    }

    let email_ok = columns
        .iter()
        .any(|(name, ty, _)| name == "email" && ty.eq_ignore_ascii_case("TEXT"));
    if !email_ok {
        return Err(mismatch("has no TEXT column 'email'"));
    }

    let email_unique: bool = conn.query_row(
        "SELECT COUNT(*) > 0
         FROM pragma_index_list('account') AS il
         JOIN pragma_index_info(il.name) AS ii
         WHERE il.\"unique\" = 1 AND ii.name = 'email'",
        [],
        |row| row.get(0),
    )?;
    if !email_unique {
        return Err(mismatch("has no unique index on 'email'"));
    }

    let table_sql: String = conn.query_row(
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'account'",
        [],
        |row| row.get(0),
    )?;
    if !table_sql.to_ascii_uppercase().contains("AUTOINCREMENT") {
        return Err(mismatch("does not use AUTOINCREMENT ids"));
    }

    Ok(())
}

/// Apply all pending migrations in a single transaction.
///
/// Returns the versions applied by this call; empty when the database was
/// already current. On any failure nothing is committed.
pub fn run_migrations(conn: &mut Connection) -> Result<Vec<i64>> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    tx.execute_batch(LEDGER_SCHEMA)?;

    let entries = read_ledger(&tx)?;
    validate_ledger(&entries, MIGRATIONS)?;

    let mut applied = Vec::new();
    for migration in MIGRATIONS {
        if entries.iter().any(|e| e.version == migration.version) {
            continue;
        }

        tx.execute_batch(migration.sql).map_err(|e| {
            Error::SchemaApplication(format!(
                "migration {} ({}) failed: {e}",
                migration.version, migration.name
            ))
        })?;
        tx.execute(
            "INSERT INTO schema_migrations (version, name, checksum, applied_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                migration.version,
                migration.name,
                migration.checksum(),
                Utc::now().to_rfc3339(),
            ],
        )?;

        tracing::info!(
            version = migration.version,
            name = migration.name,
            "applied migration"
        );
        applied.push(migration.version);
    }

    verify_account_shape(&tx)?;
    tx.commit()?;
    Ok(applied)
}

/// Report each embedded migration as applied or pending, without changing anything.
pub fn migration_status(conn: &Connection) -> Result<Vec<MigrationStatus>> {
    let entries = if ledger_exists(conn)? {
        read_ledger(conn)?
    } else {
        Vec::new()
    };

    Ok(MIGRATIONS
        .iter()
        .map(|m| MigrationStatus {
            version: m.version,
            name: m.name.to_string(),
            applied_at: entries
                .iter()
                .find(|e| e.version == m.version)
                .map(|e| e.applied_at),
        })
        .collect())
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
