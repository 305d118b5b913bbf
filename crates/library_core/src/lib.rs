//! Catalog persistence core.
//! Books and authors over SQLite, with thin services on top of repositories.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbConfig, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::author::{Author, AuthorId};
pub use model::book::{Book, Isbn};
pub use model::validation::ValidationError;
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::book_repo::{BookRepository, SqliteBookRepository};
pub use repo::{RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::book_service::BookService;

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
