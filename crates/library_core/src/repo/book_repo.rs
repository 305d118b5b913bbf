//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/get/insert/availability queries over the `book` table.
//!
//! # Invariants
//! - Every statement is parameterized; record values never reach SQL text.
//! - `insert_book` returns the exact record it was given.
//! - Lists are ordered by `isbn` so repeated calls are stable.

use crate::db::schema::table_exists;
use crate::db::DbError;
use crate::model::book::{Book, Isbn};
use crate::repo::{logged, RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

const BOOK_SELECT_SQL: &str = "SELECT
    isbn,
    author_id,
    title,
    copies_available
FROM book";

/// Repository interface for book persistence.
pub trait BookRepository {
    /// Returns every book; empty when the table has no rows.
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    /// Returns the book with `isbn`, or `None` when absent.
    fn get_book(&self, isbn: Isbn) -> RepoResult<Option<Book>>;
    /// Inserts `book` with its caller-supplied isbn.
    fn insert_book(&self, book: &Book) -> RepoResult<Book>;
    /// Returns books with `copies_available > 0`.
    fn list_available_books(&self) -> RepoResult<Vec<Book>>;
}

impl<R: BookRepository + ?Sized> BookRepository for &R {
    fn list_books(&self) -> RepoResult<Vec<Book>> {
        (**self).list_books()
    }

    fn get_book(&self, isbn: Isbn) -> RepoResult<Option<Book>> {
        (**self).get_book(isbn)
    }

    fn insert_book(&self, book: &Book) -> RepoResult<Book> {
        (**self).insert_book(book)
    }

    fn list_available_books(&self) -> RepoResult<Vec<Book>> {
        (**self).list_available_books()
    }
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Creates a repository after checking that the `book` table exists.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, "book")? {
            return Err(RepoError::Db(DbError::MissingTable("book")));
        }
        Ok(Self::new(conn))
    }

    fn query_books(&self, sql: &str) -> RepoResult<Vec<Book>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn fetch_book(&self, isbn: Isbn) -> RepoResult<Option<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE isbn = ?1;"))?;
        let mut rows = stmt.query(params![isbn])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_book_row(row)?));
        }

        Ok(None)
    }

    fn store_book(&self, book: &Book) -> RepoResult<Book> {
        book.validate()?;

        self.conn
            .execute(
                "INSERT INTO book (
                    isbn,
                    author_id,
                    title,
                    copies_available
                ) VALUES (?1, ?2, ?3, ?4);",
                params![
                    book.isbn,
                    book.author_id,
                    book.title.as_str(),
                    book.copies_available,
                ],
            )
            .map_err(|err| RepoError::from_insert(err, "book", book.isbn))?;

        debug!("event=book_insert module=repo status=ok isbn={}", book.isbn);
        Ok(book.clone())
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn list_books(&self) -> RepoResult<Vec<Book>> {
        logged(
            "book_list",
            self.query_books(&format!("{BOOK_SELECT_SQL} ORDER BY isbn ASC;")),
        )
    }

    fn get_book(&self, isbn: Isbn) -> RepoResult<Option<Book>> {
        logged("book_get", self.fetch_book(isbn))
    }

    fn insert_book(&self, book: &Book) -> RepoResult<Book> {
        logged("book_insert", self.store_book(book))
    }

    fn list_available_books(&self) -> RepoResult<Vec<Book>> {
        logged(
            "book_list_available",
            self.query_books(&format!(
                "{BOOK_SELECT_SQL} WHERE copies_available > 0 ORDER BY isbn ASC;"
            )),
        )
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    Ok(Book {
        isbn: row.get("isbn")?,
        author_id: row.get("author_id")?,
        title: row.get("title")?,
        copies_available: row.get("copies_available")?,
    })
}
