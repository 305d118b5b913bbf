//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Translate between catalog records and `author`/`book` rows.
//! - Keep SQL details out of the service layer.
//!
//! # Invariants
//! - Write paths call `validate()` before any SQL mutation.
//! - Absence is `Ok(None)` / an empty `Vec`; only faults are `Err`.
//! - Every fault is logged once, at the repository boundary, before it is
//!   returned.

use crate::db::DbError;
use crate::model::validation::ValidationError;
use log::error;
use rusqlite::ffi;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_repo;
pub mod book_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error shared by catalog repositories.
#[derive(Debug)]
pub enum RepoError {
    /// Record failed field validation; no SQL was issued.
    Validation(ValidationError),
    /// Driver or database failure, including non-key constraint violations.
    Db(DbError),
    /// Insert collided with an existing primary key.
    Duplicate { entity: &'static str, key: i64 },
}

impl RepoError {
    /// Stable short code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::Db(_) => "db_error",
            Self::Duplicate { .. } => "duplicate_key",
        }
    }

    /// Maps a failed insert into `Duplicate` when the primary key collided.
    pub(crate) fn from_insert(err: rusqlite::Error, entity: &'static str, key: i64) -> Self {
        let db_error = DbError::Sqlite(err);
        match db_error.sqlite_extended_code() {
            Some(ffi::SQLITE_CONSTRAINT_PRIMARYKEY) | Some(ffi::SQLITE_CONSTRAINT_UNIQUE) => {
                Self::Duplicate { entity, key }
            }
            _ => Self::Db(db_error),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Duplicate { entity, key } => write!(f, "{entity} {key} already exists"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Duplicate { .. } => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Logs a failed repository call and hands the result back unchanged.
pub(crate) fn logged<T>(event: &'static str, result: RepoResult<T>) -> RepoResult<T> {
    if let Err(err) = &result {
        error!(
            "event={} module=repo status=error error_code={} error={}",
            event,
            err.code(),
            err
        );
    }
    result
}
