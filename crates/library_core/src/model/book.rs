//! Book record.
//!
//! # Invariants
//! - `isbn` is the primary key and is chosen by the caller.
//! - `author_id` must reference an existing author; the schema enforces it.
//! - `copies_available` is expected to be non-negative but is not checked.

use super::author::AuthorId;
use super::validation::{check_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Book primary key.
pub type Isbn = i64;

/// One row of the `book` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: Isbn,
    pub author_id: AuthorId,
    /// At most 255 characters.
    pub title: String,
    pub copies_available: i64,
}

impl Book {
    pub fn new(
        isbn: Isbn,
        author_id: AuthorId,
        title: impl Into<String>,
        copies_available: i64,
    ) -> Self {
        Self {
            isbn,
            author_id,
            title: title.into(),
            copies_available,
        }
    }

    /// Whether at least one copy can be lent out.
    pub fn is_available(&self) -> bool {
        self.copies_available > 0
    }

    /// Validates bounded text fields before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("title", &self.title)
    }
}
