//! Book use-case service.
//!
//! # Responsibility
//! - Expose list/get/add/availability entry points for books.
//! - Reject books whose isbn is already taken.
//!
//! # Invariants
//! - A duplicate isbn is reported as `Ok(None)`, never as an error.
//! - When the pre-insert lookup finds a match, insert is not attempted.
//! - The lookup and the insert are separate statements; the primary key on
//!   `book.isbn` settles concurrent adds of the same isbn.

use crate::model::book::{Book, Isbn};
use crate::repo::book_repo::{BookRepository, SqliteBookRepository};
use crate::repo::{RepoError, RepoResult};
use log::info;
use rusqlite::Connection;

/// Use-case service wrapper for book operations.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.list_books()
    }

    pub fn get_book(&self, isbn: Isbn) -> RepoResult<Option<Book>> {
        self.repo.get_book(isbn)
    }

    /// Persists `book` unless its isbn is already in use.
    ///
    /// # Contract
    /// - Returns `Ok(Some(book))` when the book was stored.
    /// - Returns `Ok(None)` when the isbn already exists.
    /// - Returns `Err` for validation and database faults.
    pub fn add_book(&self, book: &Book) -> RepoResult<Option<Book>> {
        if self.repo.get_book(book.isbn)?.is_some() {
            info!(
                "event=book_add module=service status=rejected reason=isbn_exists isbn={}",
                book.isbn
            );
            return Ok(None);
        }

        match self.repo.insert_book(book) {
            Ok(stored) => {
                info!(
                    "event=book_add module=service status=ok isbn={}",
                    stored.isbn
                );
                Ok(Some(stored))
            }
            Err(RepoError::Duplicate { .. }) => {
                info!(
                    "event=book_add module=service status=rejected reason=isbn_conflict isbn={}",
                    book.isbn
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Lists books that have at least one copy available.
    pub fn list_available_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.list_available_books()
    }
}

impl<'conn> BookService<SqliteBookRepository<'conn>> {
    /// Creates a service backed by the default SQLite repository.
    pub fn from_connection(conn: &'conn Connection) -> Self {
        Self::new(SqliteBookRepository::new(conn))
    }
}
