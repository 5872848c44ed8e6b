//! # Loader Error Types
//!
//! All errors that can occur while decoding a `.vox` stream or reading
//! from the decoded model.

use thiserror::Error;

use crate::chunk::ChunkKind;

/// Coarse classification of a [`VoxError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoxErrorKind {
    /// The byte stream violates the expected chunk sequence.
    Format,
    /// A frame declared zero voxels.
    EmptyFrame,
    /// A caller passed an argument outside the operation's domain.
    InvalidArgument,
    /// Reading the source stream failed before parsing started.
    Io,
}

/// Errors that can occur while loading a voxel model.
#[derive(Error, Debug)]
pub enum VoxError {
    /// The file does not start with `"VOX "`.
    #[error("expected MagicaVoxel magic number but got {found:?}")]
    InvalidMagic {
        /// The four characters that were read instead.
        found: String,
    },

    /// A chunk identifier outside the known set.
    #[error("unknown chunk type {id:?}")]
    UnknownChunk {
        /// The identifier as read from the stream.
        id: String,
    },

    /// A known chunk appeared where a different one was required.
    #[error("expected {expected} chunk, found {found}")]
    UnexpectedChunk {
        /// The chunk the fixed sequence requires at this point.
        expected: ChunkKind,
        /// The chunk that was actually read.
        found: ChunkKind,
    },

    /// The stream ended before a field was fully read.
    #[error("unexpected end of data at offset {offset}: needed {needed} bytes, {remaining} left")]
    UnexpectedEof {
        /// Cursor position of the failed read.
        offset: usize,
        /// Bytes the read required.
        needed: usize,
        /// Bytes that were left.
        remaining: usize,
    },

    /// The PACK chunk declared a non-positive frame count.
    #[error("invalid frame count {0}")]
    InvalidFrameCount(i32),

    /// A SIZE chunk declared a non-positive dimension.
    #[error("invalid frame dimensions {width}x{height}x{depth}")]
    InvalidDimensions {
        /// Declared width.
        width: i32,
        /// Declared height (file's third SIZE field).
        height: i32,
        /// Declared depth (file's second SIZE field).
        depth: i32,
    },

    /// An XYZI chunk declared a negative voxel count.
    #[error("invalid voxel count {0}")]
    InvalidVoxelCount(i32),

    /// A voxel lies outside the frame declared by its SIZE chunk.
    #[error("voxel at ({x}, {y}, {z}) lies outside frame {frame}")]
    VoxelOutOfBounds {
        /// Index of the frame being read.
        frame: usize,
        /// Grid X.
        x: usize,
        /// Grid Y (file's third coordinate).
        y: usize,
        /// Grid Z (file's second coordinate).
        z: usize,
    },

    /// A frame's XYZI chunk declared zero voxels.
    #[error("encountered frame {frame} with no voxels")]
    EmptyFrame {
        /// Index of the empty frame.
        frame: usize,
    },

    /// A string read of zero characters was requested.
    #[error("requested string length {requested} has to be positive")]
    InvalidLength {
        /// The requested length.
        requested: usize,
    },

    /// Palette lookup for the reserved empty index.
    #[error("tried to retrieve color for empty voxel with palette index 0")]
    EmptyPaletteIndex,

    /// Reading the source stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VoxError {
    /// Returns the taxonomy bucket of this error.
    #[must_use]
    pub const fn kind(&self) -> VoxErrorKind {
        match self {
            Self::InvalidMagic { .. }
            | Self::UnknownChunk { .. }
            | Self::UnexpectedChunk { .. }
            | Self::UnexpectedEof { .. }
            | Self::InvalidFrameCount(_)
            | Self::InvalidDimensions { .. }
            | Self::InvalidVoxelCount(_)
            | Self::VoxelOutOfBounds { .. } => VoxErrorKind::Format,
            Self::EmptyFrame { .. } => VoxErrorKind::EmptyFrame,
            Self::InvalidLength { .. } | Self::EmptyPaletteIndex => VoxErrorKind::InvalidArgument,
            Self::Io(_) => VoxErrorKind::Io,
        }
    }
}

/// Result type for loader operations.
pub type VoxResult<T> = Result<T, VoxError>;
