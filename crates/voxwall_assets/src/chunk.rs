//! Chunk identifier decoding.
//!
//! The loader only understands five chunk kinds. Anything else is a
//! format error, wherever it appears in the stream.

use std::fmt;

use crate::cursor::ByteCursor;
use crate::error::{VoxError, VoxResult};

/// Length of a chunk identifier in bytes.
pub const CHUNK_ID_LEN: usize = 4;

/// Known chunk kinds of the MagicaVoxel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// Root chunk, `"MAIN"`.
    Main,
    /// Frame dimensions, `"SIZE"`.
    Size,
    /// Frame voxel data, `"XYZI"`.
    Xyzi,
    /// Frame count, `"PACK"`.
    Pack,
    /// Palette, `"RGBA"`.
    Rgba,
}

impl ChunkKind {
    /// All known kinds.
    pub const ALL: [Self; 5] = [Self::Main, Self::Size, Self::Xyzi, Self::Pack, Self::Rgba];

    /// Returns the four-character identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Size => "SIZE",
            Self::Xyzi => "XYZI",
            Self::Pack => "PACK",
            Self::Rgba => "RGBA",
        }
    }

    /// Maps an identifier to its chunk kind.
    ///
    /// # Errors
    ///
    /// Returns [`VoxError::UnknownChunk`] for any identifier outside the
    /// known set.
    pub fn from_id(id: &str) -> VoxResult<Self> {
        match id {
            "MAIN" => Ok(Self::Main),
            "SIZE" => Ok(Self::Size),
            "XYZI" => Ok(Self::Xyzi),
            "PACK" => Ok(Self::Pack),
            "RGBA" => Ok(Self::Rgba),
            _ => Err(VoxError::UnknownChunk { id: id.to_owned() }),
        }
    }

    /// Reads a chunk identifier from the cursor and decodes it.
    ///
    /// # Errors
    ///
    /// Fails if fewer than four bytes remain or the identifier is unknown.
    pub fn read(cursor: &mut ByteCursor<'_>) -> VoxResult<Self> {
        let id = cursor.read_ascii(CHUNK_ID_LEN)?;
        Self::from_id(&id)
    }

    /// Fails unless `self` is `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`VoxError::UnexpectedChunk`] on mismatch.
    pub fn expect(self, expected: Self) -> VoxResult<()> {
        if self == expected {
            Ok(())
        } else {
            Err(VoxError::UnexpectedChunk { expected, found: self })
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for ChunkKind {
    type Err = VoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}
