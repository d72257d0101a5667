//! Error types for personal table conversion.

use swsh_common::RecordRef;
use swsh_consts::LookupError;
use thiserror::Error;

/// Errors that can occur when converting personal tables.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error, including malformed blob lengths.
    #[error("{0}")]
    Common(#[from] swsh_common::Error),

    /// A coded field could not be resolved through the registry.
    #[error("{record}, field '{field}': {source}")]
    Lookup {
        record: RecordRef,
        field: &'static str,
        #[source]
        source: LookupError,
    },

    /// A resolved index does not fit the field's storage width.
    #[error("{record}, field '{field}': index {index} does not fit in {bits} bits")]
    FieldOverflow {
        record: RecordRef,
        field: &'static str,
        index: usize,
        bits: u32,
    },

    /// A learnset list could not be packed.
    #[error("{record}, field '{field}': {source}")]
    Learnset {
        record: RecordRef,
        field: &'static str,
        #[source]
        source: swsh_common::Error,
    },
}

/// Result type for personal table operations.
pub type Result<T> = std::result::Result<T, Error>;
