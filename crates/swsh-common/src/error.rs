//! Error types for swsh-common.

use std::fmt;

use thiserror::Error;

/// Common error type for swshtools operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// Blob length is not a whole number of records.
    #[error("invalid blob length {length}: not a multiple of the {record_size}-byte record size")]
    InvalidLength { length: usize, record_size: usize },

    /// A selected flag name does not exist in the master list.
    #[error("unknown flag name '{0}'")]
    UnknownFlag(String),

    /// A selected flag lies beyond the capacity of the bit buffer.
    #[error("flag '{name}' at position {position} does not fit in {capacity} bits")]
    FlagOutOfRange {
        name: String,
        position: usize,
        capacity: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Identifies a record inside a table, for diagnostics.
///
/// Decoding knows records by their position in the blob, encoding knows them
/// by the key they were stored under in the structured text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordRef {
    /// Record at this position in the binary blob.
    Index(usize),
    /// Entry stored under this key.
    Key(String),
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRef::Index(index) => write!(f, "record #{}", index),
            RecordRef::Key(key) => write!(f, "entry '{}'", key),
        }
    }
}

impl From<usize> for RecordRef {
    fn from(index: usize) -> Self {
        RecordRef::Index(index)
    }
}

impl From<&str> for RecordRef {
    fn from(key: &str) -> Self {
        RecordRef::Key(key.to_string())
    }
}
