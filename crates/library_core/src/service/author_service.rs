//! Author use-case service.
//!
//! Pure delegation to the repository; kept as its own layer so callers
//! depend on one service surface for both entities.

use crate::model::author::{Author, AuthorId};
use crate::repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
use crate::repo::RepoResult;
use rusqlite::Connection;

/// Use-case service wrapper for author operations.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_authors(&self) -> RepoResult<Vec<Author>> {
        self.repo.list_authors()
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    /// Persists `author`; duplicate ids surface as `RepoError::Duplicate`.
    pub fn add_author(&self, author: &Author) -> RepoResult<Author> {
        self.repo.insert_author(author)
    }
}

impl<'conn> AuthorService<SqliteAuthorRepository<'conn>> {
    /// Creates a service backed by the default SQLite repository.
    pub fn from_connection(conn: &'conn Connection) -> Self {
        Self::new(SqliteAuthorRepository::new(conn))
    }
}
