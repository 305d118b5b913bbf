use library_core::db::open_db_in_memory;
use library_core::{
    Author, AuthorRepository, Book, BookRepository, DbError, RepoError, SqliteAuthorRepository,
    SqliteBookRepository, ValidationError,
};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = open_db_in_memory().unwrap();
    let authors = SqliteAuthorRepository::try_new(&conn).unwrap();
    authors.insert_author(&Author::new(1, "Ursula K. Le Guin")).unwrap();
    authors.insert_author(&Author::new(2, "Octavia E. Butler")).unwrap();
    conn
}

#[test]
fn list_books_on_empty_table_returns_empty_vec() {
    let conn = setup();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    assert!(repo.list_books().unwrap().is_empty());
    assert!(repo.list_available_books().unwrap().is_empty());
}

#[test]
fn insert_and_get_roundtrip() {
    let conn = setup();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let book = Book::new(9780441478125, 1, "The Left Hand of Darkness", 4);
    let inserted = repo.insert_book(&book).unwrap();
    assert_eq!(inserted, book);

    let loaded = repo.get_book(book.isbn).unwrap().unwrap();
    assert_eq!(loaded, book);
}

#[test]
fn get_missing_isbn_returns_none() {
    let conn = setup();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    assert!(repo.get_book(404).unwrap().is_none());
}

#[test]
fn list_books_returns_every_row_ordered_by_isbn() {
    let conn = setup();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    repo.insert_book(&Book::new(30, 2, "Kindred", 1)).unwrap();
    repo.insert_book(&Book::new(10, 1, "The Dispossessed", 0)).unwrap();
    repo.insert_book(&Book::new(20, 2, "Parable of the Sower", 2))
        .unwrap();

    let isbns: Vec<i64> = repo
        .list_books()
        .unwrap()
        .into_iter()
        .map(|book| book.isbn)
        .collect();
    assert_eq!(isbns, vec![10, 20, 30]);
}

#[test]
fn list_available_excludes_books_without_copies() {
    let conn = setup();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    repo.insert_book(&Book::new(1, 1, "A Wizard of Earthsea", 3))
        .unwrap();
    repo.insert_book(&Book::new(2, 1, "The Tombs of Atuan", 0))
        .unwrap();
    repo.insert_book(&Book::new(3, 2, "Dawn", 1)).unwrap();

    let available = repo.list_available_books().unwrap();
    assert_eq!(available.len(), 2);
    assert!(available.iter().all(|book| book.copies_available > 0));
    assert!(available.iter().all(|book| book.isbn != 2));
}

#[test]
fn insert_duplicate_isbn_returns_duplicate_error() {
    let conn = setup();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    repo.insert_book(&Book::new(111, 1, "First", 1)).unwrap();
    let err = repo
        .insert_book(&Book::new(111, 2, "Second", 5))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Duplicate {
            entity: "book",
            key: 111
        }
    ));

    let stored = repo.get_book(111).unwrap().unwrap();
    assert_eq!(stored.title, "First");
}

#[test]
fn insert_with_unknown_author_is_a_db_fault_not_a_duplicate() {
    let conn = setup();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let err = repo
        .insert_book(&Book::new(5, 99, "Orphan", 1))
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
    assert!(repo.get_book(5).unwrap().is_none());
}

#[test]
fn validation_failure_blocks_insert() {
    let conn = setup();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    let err = repo.insert_book(&Book::new(7, 1, "   ", 1)).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::BlankField("title"))
    ));

    let err = repo
        .insert_book(&Book::new(8, 1, "t".repeat(300), 1))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::FieldTooLong { actual: 300, .. })
    ));

    assert!(repo.list_books().unwrap().is_empty());
}

#[test]
fn negative_copies_are_stored_but_not_available() {
    let conn = setup();
    let repo = SqliteBookRepository::try_new(&conn).unwrap();

    repo.insert_book(&Book::new(9, 1, "Miscounted", -2)).unwrap();

    assert_eq!(repo.get_book(9).unwrap().unwrap().copies_available, -2);
    assert!(repo.list_available_books().unwrap().is_empty());
}

#[test]
fn query_fault_is_reported_instead_of_empty_result() {
    let conn = setup();
    let repo = SqliteBookRepository::new(&conn);
    conn.execute_batch("DROP TABLE book;").unwrap();

    assert!(matches!(repo.list_books(), Err(RepoError::Db(_))));
    assert!(matches!(repo.get_book(1), Err(RepoError::Db(_))));
    assert!(matches!(repo.list_available_books(), Err(RepoError::Db(_))));
}
