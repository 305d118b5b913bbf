//! SQLite storage bootstrap for the catalog.
//!
//! # Responsibility
//! - Open and configure SQLite connections for catalog repositories.
//! - Bootstrap the `author`/`book` schema before any data access.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Repositories borrow connections; they never open or close them.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod config;
mod open;
pub mod schema;

pub use config::{DbConfig, DB_BUSY_TIMEOUT_ENV, DB_PATH_ENV, DEFAULT_BUSY_TIMEOUT_MS};
pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// A catalog table is absent; the connection was not bootstrapped.
    MissingTable(&'static str),
}

impl DbError {
    /// Returns the extended SQLite result code when the driver reported one.
    pub fn sqlite_extended_code(&self) -> Option<i32> {
        match self {
            Self::Sqlite(rusqlite::Error::SqliteFailure(err, _)) => Some(err.extended_code),
            _ => None,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::MissingTable(table) => write!(f, "catalog table `{table}` does not exist"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::MissingTable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
