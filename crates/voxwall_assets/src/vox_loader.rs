//! MagicaVoxel VOX File Loader
//!
//! Parser for one fixed chunk sequence of the MagicaVoxel `.vox` format.
//! This is NOT a generic chunk-tree walker: declared content and children
//! sizes are read and discarded, and an unknown or out-of-place chunk is
//! fatal.
//!
//! ## VOX Format Reference
//!
//! ```text
//! VOX File Structure (all integers little-endian):
//! ├── "VOX " (4 bytes) - Magic number, trailing space included
//! ├── Version (i32) - ignored
//! └── MAIN Chunk (i32 content, i32 children)
//!     ├── PACK Chunk (optional) - i32 i32, i32 frame count
//!     ├── frame count × (
//!     │     SIZE Chunk - i32 i32, i32 width, i32 depth, i32 height
//!     │     XYZI Chunk - i32 i32, i32 n, n × (u8 x, u8 y, u8 z, u8 index)
//!     │   )
//!     └── RGBA Chunk (optional) - i32 i32, 255 × (u8 r, g, b, a)
//! ```
//!
//! MagicaVoxel is Z-up, the engine is Y-up: the file's second and third
//! coordinates are swapped on the way in.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use voxwall_assets::{MagicaVoxelLoader, VoxelModelLoader};
//!
//! let bytes = std::fs::read("assets/models/tree.vox")?;
//! let model = MagicaVoxelLoader.load(&bytes)?;
//! ```

use std::io::Read;

use voxwall_shared::{Color, FILE_PALETTE_ENTRIES, PALETTE_SIZE};

use crate::chunk::ChunkKind;
use crate::cursor::ByteCursor;
use crate::error::{VoxError, VoxResult};
use crate::model::{VolumeDims, VoxelModel, VoxelVolume};
use crate::palette::Palette;

/// VOX file magic number. The space is intentional.
pub const VOX_MAGIC: &str = "VOX ";

/// A low-level model loader.
///
/// Loaders do not care about file paths or extensions; they work directly
/// on the raw bytes of one model.
pub trait VoxelModelLoader {
    /// Decodes a model and all its frames from an in-memory buffer.
    ///
    /// # Errors
    ///
    /// Returns the first format violation encountered. No partially
    /// populated model is ever returned.
    fn load(&self, data: &[u8]) -> VoxResult<VoxelModel>;

    /// Reads `reader` to the end, then decodes it with [`VoxelModelLoader::load`].
    ///
    /// # Errors
    ///
    /// Returns [`VoxError::Io`] if reading fails, otherwise any error of
    /// [`VoxelModelLoader::load`].
    fn load_reader<R: Read>(&self, mut reader: R) -> VoxResult<VoxelModel>
    where
        Self: Sized,
    {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.load(&data)
    }
}

/// Loader for the MagicaVoxel `.vox` format.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicaVoxelLoader;

impl VoxelModelLoader for MagicaVoxelLoader {
    fn load(&self, data: &[u8]) -> VoxResult<VoxelModel> {
        let mut cursor = ByteCursor::new(data);
        Self::parse(&mut cursor)
    }
}

/// Decodes a `.vox` buffer with [`MagicaVoxelLoader`].
///
/// # Errors
///
/// See [`VoxelModelLoader::load`].
pub fn load(data: &[u8]) -> VoxResult<VoxelModel> {
    MagicaVoxelLoader.load(data)
}

impl MagicaVoxelLoader {
    /// Runs the fixed-sequence state machine.
    fn parse(cursor: &mut ByteCursor<'_>) -> VoxResult<VoxelModel> {
        // Check magic number
        let magic = cursor.read_ascii(VOX_MAGIC.len())?;
        if magic != VOX_MAGIC {
            return Err(VoxError::InvalidMagic { found: magic });
        }

        // Version is not validated
        let _version = cursor.read_i32()?;

        ChunkKind::read(cursor)?.expect(ChunkKind::Main)?;
        cursor.skip_i32(2)?;

        // The header after MAIN is either PACK or already the first SIZE.
        let lookahead = ChunkKind::read(cursor)?;
        let (frame_count, mut pending) = if lookahead == ChunkKind::Pack {
            (Self::read_pack(cursor)?, None)
        } else {
            (1, Some(lookahead))
        };
        tracing::debug!(frame_count, "expecting sub models");

        let mut frames = Vec::new();
        for frame_index in 0..frame_count {
            let header = match pending.take() {
                Some(header) => header,
                None => ChunkKind::read(cursor)?,
            };
            frames.push(Self::read_frame(cursor, header, frame_index)?);
        }

        let palette = Self::read_trailing_palette(cursor)?;
        tracing::debug!(
            frames = frames.len(),
            custom_palette = palette.is_some(),
            "loaded voxel model"
        );

        VoxelModel::new(frames, palette.unwrap_or_default())
            .ok_or(VoxError::InvalidFrameCount(0))
    }

    /// Reads the PACK body and returns the number of frames to expect.
    fn read_pack(cursor: &mut ByteCursor<'_>) -> VoxResult<usize> {
        cursor.skip_i32(2)?;
        let count = cursor.read_i32()?;
        match usize::try_from(count) {
            Ok(count) if count > 0 => Ok(count),
            _ => Err(VoxError::InvalidFrameCount(count)),
        }
    }

    /// Reads one SIZE + XYZI pair. `header` is the already-consumed SIZE id.
    fn read_frame(
        cursor: &mut ByteCursor<'_>,
        header: ChunkKind,
        frame_index: usize,
    ) -> VoxResult<VoxelVolume> {
        header.expect(ChunkKind::Size)?;
        let mut volume = Self::read_size(cursor)?;
        let dims = volume.dims();

        ChunkKind::read(cursor)?.expect(ChunkKind::Xyzi)?;
        cursor.skip_i32(2)?;

        let voxel_count = cursor.read_i32()?;
        if voxel_count == 0 {
            return Err(VoxError::EmptyFrame { frame: frame_index });
        }
        let voxel_count =
            usize::try_from(voxel_count).map_err(|_| VoxError::InvalidVoxelCount(voxel_count))?;
        tracing::trace!(
            frame = frame_index,
            width = dims.width,
            height = dims.height,
            depth = dims.depth,
            voxel_count,
            "reading frame"
        );

        for _ in 0..voxel_count {
            let fx = usize::from(cursor.read_u8()?);
            let fy = usize::from(cursor.read_u8()?);
            let fz = usize::from(cursor.read_u8()?);
            let color_index = cursor.read_u8()?;

            // In MagicaVoxel z is the height; in the engine it is y.
            let (x, y, z) = (fx, fz, fy);
            if !dims.contains(x, y, z) {
                return Err(VoxError::VoxelOutOfBounds { frame: frame_index, x, y, z });
            }
            volume.set_color_index_at(x, y, z, color_index);
        }

        Ok(volume)
    }

    /// Reads the SIZE body and allocates the empty frame it declares.
    /// The file stores width, depth, height.
    ///
    /// Any positive extent is accepted; a cell count that overflows or
    /// cannot be allocated is reported as invalid dimensions.
    fn read_size(cursor: &mut ByteCursor<'_>) -> VoxResult<VoxelVolume> {
        cursor.skip_i32(2)?;
        let width = cursor.read_i32()?;
        let depth = cursor.read_i32()?;
        let height = cursor.read_i32()?;

        let invalid = || VoxError::InvalidDimensions { width, height, depth };
        let axis = |value: i32| match usize::try_from(value) {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(invalid()),
        };

        let dims = VolumeDims::new(axis(width)?, axis(height)?, axis(depth)?);
        VoxelVolume::try_new(dims).ok_or_else(invalid)
    }

    /// Reads the optional chunk after the last frame.
    ///
    /// Returns a palette only for RGBA. Another known chunk, or no bytes
    /// at all, leaves the default palette in place.
    fn read_trailing_palette(cursor: &mut ByteCursor<'_>) -> VoxResult<Option<Palette>> {
        if cursor.is_empty() {
            return Ok(None);
        }

        match ChunkKind::read(cursor)? {
            ChunkKind::Rgba => Self::read_rgba(cursor).map(Some),
            other => {
                tracing::trace!(chunk = %other, "ignoring trailing chunk");
                Ok(None)
            }
        }
    }

    /// Reads the RGBA body into a complete color table.
    ///
    /// The 255 stored entries land in slots 0..=254 in read order, so the
    /// last slot keeps the default color.
    fn read_rgba(cursor: &mut ByteCursor<'_>) -> VoxResult<Palette> {
        cursor.skip_i32(2)?;

        let mut colors = [Color::WHITE; PALETTE_SIZE];
        for slot in colors.iter_mut().take(FILE_PALETTE_ENTRIES) {
            let r = cursor.read_u8()?;
            let g = cursor.read_u8()?;
            let b = cursor.read_u8()?;
            let a = cursor.read_u8()?;
            *slot = Color::from_rgba8(r, g, b, a);
        }

        Ok(Palette::from_colors(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VoxErrorKind;

    fn push_i32(out: &mut Vec<u8>, value: i32) {
        out.extend_from_slice(&value.to_le_bytes());
    }

    fn push_chunk(out: &mut Vec<u8>, id: &[u8; 4]) {
        out.extend_from_slice(id);
        push_i32(out, 0);
        push_i32(out, 0);
    }

    /// Header + MAIN, ready for frames.
    fn header() -> Vec<u8> {
        let mut out = b"VOX ".to_vec();
        push_i32(&mut out, 150);
        push_chunk(&mut out, b"MAIN");
        out
    }

    fn push_frame(out: &mut Vec<u8>, size: [i32; 3], voxels: &[[u8; 4]]) {
        push_chunk(out, b"SIZE");
        for value in size {
            push_i32(out, value);
        }
        push_chunk(out, b"XYZI");
        push_i32(out, i32::try_from(voxels.len()).unwrap());
        for voxel in voxels {
            out.extend_from_slice(voxel);
        }
    }

    #[test]
    fn test_minimal_model() {
        let mut data = header();
        push_frame(&mut data, [1, 1, 1], &[[0, 0, 0, 7]]);

        let model = load(&data).unwrap();
        assert_eq!(model.frame_count(), 1);
        let frame = &model.frames()[0];
        assert_eq!(frame.dims(), VolumeDims::new(1, 1, 1));
        assert!(frame.has_voxel_at(0, 0, 0));
        assert_eq!(frame.color_index_at(0, 0, 0), 7);
        assert_eq!(model.palette(), &Palette::default());
    }

    #[test]
    fn test_size_fields_map_to_width_depth_height() {
        let mut data = header();
        push_frame(&mut data, [2, 3, 4], &[[0, 0, 0, 1]]);

        let dims = load(&data).unwrap().frames()[0].dims();
        assert_eq!(dims.width, 2);
        assert_eq!(dims.depth, 3);
        assert_eq!(dims.height, 4);
    }

    #[test]
    fn test_voxel_coordinates_swap_y_and_z() {
        let mut data = header();
        // width 2, depth 3, height 4; file voxel (1, 2, 3)
        push_frame(&mut data, [2, 3, 4], &[[1, 2, 3, 5]]);

        let model = load(&data).unwrap();
        let frame = &model.frames()[0];
        assert_eq!(frame.color_index_at(1, 3, 2), 5);
        assert_eq!(frame.occupied_count(), 1);
    }

    #[test]
    fn test_bad_magic() {
        let mut data = header();
        data[3] = b'!';
        push_frame(&mut data, [1, 1, 1], &[[0, 0, 0, 1]]);

        let err = load(&data).unwrap_err();
        assert!(matches!(err, VoxError::InvalidMagic { ref found } if found == "VOX!"));
    }

    #[test]
    fn test_missing_main() {
        let mut data = b"VOX ".to_vec();
        push_i32(&mut data, 150);
        push_frame(&mut data, [1, 1, 1], &[[0, 0, 0, 1]]);

        let err = load(&data).unwrap_err();
        assert!(matches!(
            err,
            VoxError::UnexpectedChunk { expected: ChunkKind::Main, found: ChunkKind::Size }
        ));
    }

    #[test]
    fn test_empty_frame() {
        let mut data = header();
        push_frame(&mut data, [1, 1, 1], &[]);

        let err = load(&data).unwrap_err();
        assert_eq!(err.kind(), VoxErrorKind::EmptyFrame);
    }

    #[test]
    fn test_negative_frame_count() {
        let mut data = header();
        push_chunk(&mut data, b"PACK");
        push_i32(&mut data, -1);
        push_frame(&mut data, [1, 1, 1], &[[0, 0, 0, 1]]);

        assert!(matches!(load(&data).unwrap_err(), VoxError::InvalidFrameCount(-1)));
    }

    #[test]
    fn test_invalid_dimensions() {
        for size in [[0, 1, 1], [1, -4, 1], [1, 1, i32::MIN]] {
            let mut data = header();
            push_frame(&mut data, size, &[[0, 0, 0, 1]]);
            let err = load(&data).unwrap_err();
            assert!(matches!(err, VoxError::InvalidDimensions { .. }), "{size:?}");
        }
    }

    #[test]
    fn test_voxel_out_of_bounds() {
        let mut data = header();
        push_frame(&mut data, [2, 2, 2], &[[0, 0, 2, 1]]);

        let err = load(&data).unwrap_err();
        assert!(matches!(err, VoxError::VoxelOutOfBounds { frame: 0, x: 0, y: 2, z: 0 }));
    }

    #[test]
    fn test_trailing_known_chunk_keeps_default_palette() {
        let mut data = header();
        push_frame(&mut data, [1, 1, 1], &[[0, 0, 0, 1]]);
        push_chunk(&mut data, b"SIZE");

        let model = load(&data).unwrap();
        assert_eq!(model.palette(), &Palette::default());
    }

    #[test]
    fn test_trailing_unknown_chunk_is_fatal() {
        let mut data = header();
        push_frame(&mut data, [1, 1, 1], &[[0, 0, 0, 1]]);
        push_chunk(&mut data, b"nTRN");

        assert!(matches!(load(&data).unwrap_err(), VoxError::UnknownChunk { .. }));
    }

    #[test]
    fn test_load_reader() {
        let mut data = header();
        push_frame(&mut data, [1, 1, 1], &[[0, 0, 0, 3]]);

        let model = MagicaVoxelLoader.load_reader(std::io::Cursor::new(data)).unwrap();
        assert_eq!(model.frames()[0].color_index_at(0, 0, 0), 3);
    }
}
