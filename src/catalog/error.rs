//! Error types for the catalog actors.

use crate::error::ValidationError;
use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A field failed validation; nothing was written.
    #[error("Catalog validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The actor behind the table could not be reached.
    #[error("Catalog storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    /// Recovers the typed error raised by a catalog hook, or classifies a transport failure.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e.downcast::<CatalogError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => CatalogError::NotFound(id),
            Err(other) => CatalogError::Storage(other.to_string()),
        }
    }
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::Storage(msg)
    }
}
