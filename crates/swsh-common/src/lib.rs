//! Common utilities for swshtools.
//!
//! This crate provides the building blocks shared by every table format:
//!
//! - [`BinaryReader`] - Zero-copy record slicing over byte buffers
//! - [`flags`] - Bit-flag set encoding against a fixed master list
//! - [`Keyed`] - An insertion-ordered, name-keyed collection of entries
//! - [`RecordRef`] - Identifies the record an error occurred in
//! - [`hex_bytes`] - Serde adapter for opaque byte blobs (requires `serde`)

mod error;
mod keyed;
mod reader;

pub mod flags;

#[cfg(feature = "serde")]
pub mod hex_bytes;

pub use error::{Error, RecordRef, Result};
pub use keyed::Keyed;
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};
