//! Error types for the document model.

use std::fmt;

/// Errors that can occur during document operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The element ID is invalid or the element has been destroyed.
    InvalidElementId,
    /// Attempted to append an element to itself or one of its descendants.
    CircularParentage,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidElementId => write!(f, "Invalid or destroyed element ID"),
            Self::CircularParentage => {
                write!(f, "Cannot append an element to itself or one of its descendants")
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// Result type for document operations.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;
