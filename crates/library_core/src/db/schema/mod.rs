//! Catalog schema bootstrap.
//!
//! # Responsibility
//! - Create the `author` and `book` tables on a fresh database.
//! - Refuse databases stamped by a newer build.
//!
//! # Invariants
//! - The applied schema version is mirrored to `PRAGMA user_version`.
//! - Bootstrap runs inside one transaction; a failed bootstrap leaves the
//!   database untouched.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// Schema version stamped after the catalog tables are created.
pub const SCHEMA_VERSION: u32 = 1;

const CATALOG_SQL: &str = include_str!("0001_catalog.sql");

/// Creates the catalog tables when the database has not been bootstrapped.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let current_version = schema_version(conn)?;

    if current_version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    if current_version == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(CATALOG_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    info!(
        "event=schema_bootstrap module=db status=ok from_version={} to_version={}",
        current_version, SCHEMA_VERSION
    );
    Ok(())
}

/// Reads the version stamp of an open database.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Returns whether `table_name` exists in the connected database.
pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
