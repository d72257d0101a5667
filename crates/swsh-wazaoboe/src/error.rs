//! Error types for level-up learnset conversion.

use swsh_common::RecordRef;
use swsh_consts::LookupError;
use thiserror::Error;

/// Errors that can occur when converting level-up learnsets.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error, including malformed blob lengths.
    #[error("{0}")]
    Common(#[from] swsh_common::Error),

    /// A move or species name could not be resolved.
    #[error("{record}, field '{field}': {source}")]
    Lookup {
        record: RecordRef,
        field: &'static str,
        #[source]
        source: LookupError,
    },

    /// A move index collides with the 0xFFFF sentinel or exceeds 16 bits.
    #[error("{record}: move '{name}' has index {index}, which cannot be stored")]
    MoveOverflow {
        record: RecordRef,
        name: String,
        index: usize,
    },

    /// A level of 0xFFFF would read back as an empty slot.
    #[error("{record}: level 65535 is reserved for empty slots")]
    SentinelLevel { record: RecordRef },
}

/// Result type for learnset operations.
pub type Result<T> = std::result::Result<T, Error>;
