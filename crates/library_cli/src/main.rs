//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `library_core` linkage.
//! - Print a catalog summary for the database named by `LIBRARY_DB_PATH`
//!   (an empty in-memory catalog when unset).
//!
//! Set `LIBRARY_LOG_DIR` to an absolute path to enable file logging.

use library_core::{
    core_version, default_log_level, init_logging, ping, AuthorService, BookService, DbConfig,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "LIBRARY_LOG_DIR";

fn main() -> ExitCode {
    println!("library_core ping={}", ping());
    println!("library_core version={}", core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match summarize() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_summary module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn summarize() -> Result<(), Box<dyn std::error::Error>> {
    let config = DbConfig::from_env()?;
    let conn = config.open()?;

    let books = BookService::from_connection(&conn);
    let authors = AuthorService::from_connection(&conn);

    println!("authors={}", authors.list_authors()?.len());
    println!("books={}", books.list_books()?.len());
    println!("books_available={}", books.list_available_books()?.len());
    Ok(())
}
