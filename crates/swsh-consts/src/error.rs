//! Error types for the enumeration registry.

use thiserror::Error;

use crate::Category;

/// Errors that can occur while loading the registry.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed side file, including missing categories.
    #[error("invalid constants file: {0}")]
    Json(#[from] serde_json::Error),

    /// A name appears twice within one category.
    #[error("duplicate name '{name}' in category '{category}' (indices {first} and {second})")]
    DuplicateName {
        category: Category,
        name: String,
        first: usize,
        second: usize,
    },
}

/// Result type for registry loading.
pub type Result<T> = std::result::Result<T, Error>;

/// A failed name/index resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Index has no name in the category.
    #[error("index {index} out of range for category '{category}' ({len} entries)")]
    IndexOutOfRange {
        category: Category,
        index: usize,
        len: usize,
    },

    /// Name does not exist in the category.
    #[error("name '{name}' not found in category '{category}'")]
    UnknownName { category: Category, name: String },
}
