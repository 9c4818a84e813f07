// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use acct_core::{migration_status, Database, MigrationStatus, MIGRATIONS};
use rusqlite::{Connection, OpenFlags};

use crate::display::format_migration_status;
use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, status: bool) -> Result<()> {
    if status {
        for entry in read_status(&ctx.db_path)? {
            println!("{}", format_migration_status(&entry));
        }
        return Ok(());
    }

    let (_db, applied) = Database::open_and_migrate(&ctx.db_path, ctx.busy_timeout)?;
    if applied.is_empty() {
        println!("Database is up to date");
    }
    for version in applied {
        let name = MIGRATIONS
            .iter()
            .find(|m| m.version == version)
            .map_or("unknown", |m| m.name);
        println!("Applied migration {version} ({name})");
    }
    Ok(())
}

/// Read migration status without creating or migrating the database.
pub(crate) fn read_status(path: &Path) -> Result<Vec<MigrationStatus>> {
    // No SQLITE_OPEN_CREATE: a missing file is reported as all pending below
    let conn = if path.exists() {
        Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)?
    } else {
        Connection::open_in_memory()?
    };
    Ok(migration_status(&conn)?)
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
