//! Author record.

use super::validation::{check_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Author primary key.
pub type AuthorId = i64;

/// One row of the `author` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    /// At most 255 characters.
    pub name: String,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("name", &self.name)
    }
}
