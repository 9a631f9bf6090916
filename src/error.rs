//! Field-level validation error shared by the catalog and order paths.

use thiserror::Error;

/// Malformed or missing input, naming the offending field.
///
/// Nested fields use a path, e.g. `products[1].quantity`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Checks a text field against its length limit. Blank values are rejected unless
/// `allow_blank` is set.
pub fn check_text(
    field: &str,
    value: &str,
    max_chars: usize,
    allow_blank: bool,
) -> Result<(), ValidationError> {
    if !allow_blank && value.trim().is_empty() {
        return Err(ValidationError::new(field, "this field may not be blank"));
    }
    let len = value.chars().count();
    if len > max_chars {
        return Err(ValidationError::new(
            field,
            format!("ensure this field has no more than {max_chars} characters (it has {len})"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_text_counts_characters_not_bytes() {
        // 50 Cyrillic letters are 100 bytes
        let name = "б".repeat(50);
        assert!(check_text("name", &name, 50, false).is_ok());

        let err = check_text("name", &"б".repeat(51), 50, false).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_check_text_blank() {
        assert!(check_text("address", "", 100, true).is_ok());
        let err = check_text("firstname", "   ", 50, false).unwrap_err();
        assert_eq!(err.to_string(), "firstname: this field may not be blank");
    }
}
