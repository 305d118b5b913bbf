use library_core::db::schema::{schema_version, table_exists, SCHEMA_VERSION};
use library_core::db::{open_db, open_db_in_memory, DbConfig, DbError};
use library_core::{RepoError, SqliteBookRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_bootstraps_catalog_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), SCHEMA_VERSION);
    assert!(table_exists(&conn, "author").unwrap());
    assert!(table_exists(&conn, "book").unwrap());
}

#[test]
fn book_table_has_expected_columns() {
    let conn = open_db_in_memory().unwrap();

    let mut stmt = conn.prepare("PRAGMA table_info(book);").unwrap();
    let mut rows = stmt.query([]).unwrap();
    let mut columns = Vec::new();
    while let Some(row) = rows.next().unwrap() {
        let column_name: String = row.get(1).unwrap();
        columns.push(column_name);
    }
    assert_eq!(columns, ["isbn", "author_id", "title", "copies_available"]);
}

#[test]
fn opened_connections_enforce_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn reopening_file_database_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.sqlite3");

    let conn = open_db(&path).unwrap();
    conn.execute("INSERT INTO author (id, name) VALUES (1, 'Le Guin');", [])
        .unwrap();
    drop(conn);

    let conn = DbConfig::file(&path).open().unwrap();
    assert_eq!(schema_version(&conn).unwrap(), SCHEMA_VERSION);
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM author;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 42;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 42);
            assert_eq!(latest_supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_try_new_rejects_unbootstrapped_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteBookRepository::try_new(&conn).err().unwrap();
    assert!(matches!(err, RepoError::Db(DbError::MissingTable("book"))));
}

#[test]
fn db_config_deserializes_with_defaults() {
    let config: DbConfig = serde_json::from_str(r#"{ "path": "/var/lib/catalog.db" }"#).unwrap();
    assert_eq!(config, DbConfig::file("/var/lib/catalog.db"));

    let config: DbConfig = serde_json::from_str(r#"{ "busy_timeout_ms": 10 }"#).unwrap();
    assert!(config.path.is_none());
    assert_eq!(config.busy_timeout_ms, 10);
}
