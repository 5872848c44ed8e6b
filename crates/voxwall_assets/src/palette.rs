//! Voxel color palette.
//!
//! Voxels store an 8-bit palette index. Index 0 means "no voxel" and has
//! no color; indices 1-255 select an entry of the 256-color table.

use voxwall_shared::{Color, PALETTE_SIZE};

use crate::error::{VoxError, VoxResult};

/// Fixed 256-entry color table shared by every frame of a model.
///
/// A palette is never patched in place: a custom palette is built as a
/// complete array and moved in with [`Palette::from_colors`].
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Default for Palette {
    /// The default palette. For now, completely white.
    fn default() -> Self {
        Self {
            colors: [Color::WHITE; PALETTE_SIZE],
        }
    }
}

impl Palette {
    /// Creates a palette from a complete color table.
    #[must_use]
    pub const fn from_colors(colors: [Color; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Returns the color of a voxel with the given palette index.
    ///
    /// # Errors
    ///
    /// Returns [`VoxError::EmptyPaletteIndex`] for index 0, which marks an
    /// empty cell.
    #[inline]
    pub fn color_at(&self, index: u8) -> VoxResult<Color> {
        if index == 0 {
            return Err(VoxError::EmptyPaletteIndex);
        }
        // A u8 always indexes into the 256-entry table.
        Ok(self.colors[usize::from(index)])
    }

    /// Returns the whole color table, including the reserved slot 0.
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }
}
