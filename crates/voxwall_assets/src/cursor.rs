//! Little-endian byte cursor.
//!
//! A forward-only reader over an in-memory buffer. Every read either
//! consumes exactly the bytes it needs or fails without moving.

use crate::error::{VoxError, VoxResult};

/// Forward-only little-endian reader.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a new cursor at the start of `buffer`.
    #[must_use]
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, position: 0 }
    }

    /// Returns the number of bytes consumed so far.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes remaining.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Returns true if every byte has been consumed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consumes `count` bytes and returns them.
    fn take(&mut self, count: usize) -> VoxResult<&'a [u8]> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(VoxError::UnexpectedEof {
                offset: self.position,
                needed: count,
                remaining,
            });
        }
        let slice = &self.buffer[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    /// Consumes exactly `N` bytes into an array.
    fn take_array<const N: usize>(&mut self) -> VoxResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Reads a single unsigned byte.
    ///
    /// # Errors
    ///
    /// Returns [`VoxError::UnexpectedEof`] if the buffer is exhausted.
    #[inline]
    pub fn read_u8(&mut self) -> VoxResult<u8> {
        let [value] = self.take_array::<1>()?;
        Ok(value)
    }

    /// Reads an i32 in little-endian format.
    ///
    /// # Errors
    ///
    /// Returns [`VoxError::UnexpectedEof`] if fewer than 4 bytes remain.
    #[inline]
    pub fn read_i32(&mut self) -> VoxResult<i32> {
        self.take_array::<4>().map(i32::from_le_bytes)
    }

    /// Reads `count` bytes as an ASCII string.
    ///
    /// Bytes outside the ASCII range decode to U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns [`VoxError::InvalidLength`] if `count` is zero and
    /// [`VoxError::UnexpectedEof`] if fewer than `count` bytes remain.
    pub fn read_ascii(&mut self, count: usize) -> VoxResult<String> {
        if count == 0 {
            return Err(VoxError::InvalidLength { requested: count });
        }
        let bytes = self.take(count)?;
        Ok(bytes
            .iter()
            .map(|&b| {
                if b.is_ascii() {
                    char::from(b)
                } else {
                    char::REPLACEMENT_CHARACTER
                }
            })
            .collect())
    }

    /// Discards `count` little-endian i32 fields.
    ///
    /// Used for the content/children size fields the fixed sequence does
    /// not need.
    ///
    /// # Errors
    ///
    /// Returns [`VoxError::UnexpectedEof`] if the fields are truncated.
    pub fn skip_i32(&mut self, count: usize) -> VoxResult<()> {
        self.take(count * 4).map(|_| ())
    }
}
