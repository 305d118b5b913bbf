//! Configuration-driven connection factory.
//!
//! # Responsibility
//! - Describe where the catalog database lives and how connections behave.
//! - Hand out fresh, bootstrapped connections on demand.
//!
//! # Invariants
//! - `path = None` selects a private in-memory database.
//! - Loading configuration never panics; bad values are reported as errors.

use super::open::open_with;
use super::DbResult;
use rusqlite::Connection;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the database file path.
pub const DB_PATH_ENV: &str = "LIBRARY_DB_PATH";
/// Environment variable holding the busy timeout in milliseconds.
pub const DB_BUSY_TIMEOUT_ENV: &str = "LIBRARY_DB_BUSY_TIMEOUT_MS";
/// Busy timeout applied when none is configured.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Connection settings for the catalog database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DbConfig {
    /// SQLite file path. `None` opens an in-memory database.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// How long a statement waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl DbConfig {
    /// Config for a private in-memory database.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    /// Config for an on-disk database at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    /// Loads config from `LIBRARY_DB_PATH` / `LIBRARY_DB_BUSY_TIMEOUT_MS`.
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads config from an arbitrary key lookup.
    ///
    /// # Errors
    /// - Returns an error when the busy timeout is not a non-negative integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let path = lookup(DB_PATH_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let busy_timeout_ms = match lookup(DB_BUSY_TIMEOUT_ENV) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|err| {
                format!("invalid {DB_BUSY_TIMEOUT_ENV} value `{}`: {err}", raw.trim())
            })?,
            None => DEFAULT_BUSY_TIMEOUT_MS,
        };

        Ok(Self {
            path,
            busy_timeout_ms,
        })
    }

    /// Obtains a new bootstrapped connection.
    ///
    /// The caller owns the connection; dropping it releases the handle.
    pub fn open(&self) -> DbResult<Connection> {
        let busy_timeout = Duration::from_millis(self.busy_timeout_ms);
        match &self.path {
            Some(path) => open_with("file", || Connection::open(path), busy_timeout),
            None => open_with("memory", Connection::open_in_memory, busy_timeout),
        }
    }
}

fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}
