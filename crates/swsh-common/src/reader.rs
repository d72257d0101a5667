//! Binary reader for zero-copy slicing of fixed-size records.
//!
//! This module provides [`BinaryReader`], a cursor-like type that walks a
//! table blob one record at a time without copying the underlying buffer.

use zerocopy::FromBytes;

use crate::{Error, Result};

/// A binary reader that hands out fixed-size records from a byte slice.
///
/// # Example
///
/// ```
/// use swsh_common::BinaryReader;
///
/// let data = [0x01, 0x00, 0x02, 0x00];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.record_count::<[u8; 2]>().unwrap(), 2);
/// assert_eq!(reader.read_struct::<[u8; 2]>().unwrap(), [0x01, 0x00]);
/// assert_eq!(reader.read_struct::<[u8; 2]>().unwrap(), [0x02, 0x00]);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Start reading a table blob from its first record.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Byte offset of the next record.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Bytes left after the current position.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// `true` once every record has been consumed.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Number of whole `T` records left in the buffer.
    ///
    /// Fails with [`Error::InvalidLength`] if the remaining bytes are not an
    /// exact multiple of the record size; a table blob never carries a
    /// partial trailing record.
    pub fn record_count<T>(&self) -> Result<usize> {
        let record_size = std::mem::size_of::<T>();
        if record_size == 0 {
            return Ok(0);
        }

        let remaining = self.remaining();
        if remaining % record_size != 0 {
            return Err(Error::InvalidLength {
                length: remaining,
                record_size,
            });
        }
        Ok(remaining / record_size)
    }

    /// Borrow the next `count` bytes.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                needed: count,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Copy the next record out as a `T`.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            needed: size,
            available: bytes.len(),
        })
    }
}
