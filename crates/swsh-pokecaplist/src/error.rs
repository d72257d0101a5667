//! Error types for icon list conversion.

use swsh_common::RecordRef;
use swsh_consts::LookupError;
use thiserror::Error;

/// Errors that can occur when converting icon lists.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error, including malformed blob lengths.
    #[error("{0}")]
    Common(#[from] swsh_common::Error),

    /// A gender type could not be resolved.
    #[error("{record}, field '{field}': {source}")]
    Lookup {
        record: RecordRef,
        field: &'static str,
        #[source]
        source: LookupError,
    },

    /// A gender index does not fit in 16 bits.
    #[error("{record}: gender index {index} does not fit in 16 bits")]
    GenderOverflow { record: RecordRef, index: usize },
}

/// Result type for icon list operations.
pub type Result<T> = std::result::Result<T, Error>;
