//! Field validation for catalog records.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum character length of bounded text columns (`VARCHAR(255)`).
pub const MAX_TEXT_LEN: usize = 255;

/// Record-level validation failure raised before any SQL is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty after trimming.
    BlankField(&'static str),
    /// Field exceeds its column bound.
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::FieldTooLong { field, max, actual } => {
                write!(f, "{field} is {actual} characters long; at most {max} allowed")
            }
        }
    }
}

impl Error for ValidationError {}

/// Checks a bounded, required text column.
pub(crate) fn check_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    let actual = value.chars().count();
    if actual > MAX_TEXT_LEN {
        return Err(ValidationError::FieldTooLong {
            field,
            max: MAX_TEXT_LEN,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_text, ValidationError, MAX_TEXT_LEN};

    #[test]
    fn length_is_counted_in_chars_not_bytes() {
        let title = "é".repeat(MAX_TEXT_LEN);
        assert!(check_text("title", &title).is_ok());
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert_eq!(
            check_text("name", " \t "),
            Err(ValidationError::BlankField("name"))
        );
    }
}
