//! Author repository contract and SQLite implementation.
//!
//! # Invariants
//! - Author ids are caller-supplied; a reused id is `RepoError::Duplicate`.

use crate::db::schema::table_exists;
use crate::db::DbError;
use crate::model::author::{Author, AuthorId};
use crate::repo::{logged, RepoError, RepoResult};
use log::debug;
use rusqlite::{params, Connection, Row};

/// Repository interface for author persistence.
pub trait AuthorRepository {
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Inserts `author` and returns it unchanged.
    fn insert_author(&self, author: &Author) -> RepoResult<Author>;
}

impl<R: AuthorRepository + ?Sized> AuthorRepository for &R {
    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        (**self).list_authors()
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        (**self).get_author(id)
    }

    fn insert_author(&self, author: &Author) -> RepoResult<Author> {
        (**self).insert_author(author)
    }
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Creates a repository after checking that the `author` table exists.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, "author")? {
            return Err(RepoError::Db(DbError::MissingTable("author")));
        }
        Ok(Self::new(conn))
    }

    fn fetch_authors(&self) -> RepoResult<Vec<Author>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM author ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut authors = Vec::new();

        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }

        Ok(authors)
    }

    fn fetch_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM author WHERE id = ?1;")?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_author_row(row)?)),
            None => Ok(None),
        }
    }

    fn store_author(&self, author: &Author) -> RepoResult<Author> {
        author.validate()?;

        self.conn
            .execute(
                "INSERT INTO author (id, name) VALUES (?1, ?2);",
                params![author.id, author.name.as_str()],
            )
            .map_err(|err| RepoError::from_insert(err, "author", author.id))?;

        debug!("event=author_insert module=repo status=ok id={}", author.id);
        Ok(author.clone())
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        logged("author_list", self.fetch_authors())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        logged("author_get", self.fetch_author(id))
    }

    fn insert_author(&self, author: &Author) -> RepoResult<Author> {
        logged("author_insert", self.store_author(author))
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    Ok(Author {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
