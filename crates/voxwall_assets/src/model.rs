//! Decoded voxel data model.
//!
//! Coordinates follow the engine convention: `y` is the up axis and `z`
//! the depth axis. Storage is dense, one palette-index byte per cell:
//!
//! ```text
//! index(x, y, z) = x + y * width + z * width * height
//! ```

use crate::palette::Palette;

/// Dimensions of a single frame, all strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumeDims {
    /// Extent along X.
    pub width: usize,
    /// Extent along Y (up).
    pub height: usize,
    /// Extent along Z (depth).
    pub depth: usize,
}

impl VolumeDims {
    /// Creates new dimensions.
    #[must_use]
    pub const fn new(width: usize, height: usize, depth: usize) -> Self {
        Self { width, height, depth }
    }

    /// Number of cells in a volume of these dimensions.
    #[inline]
    #[must_use]
    pub const fn volume(self) -> usize {
        self.width * self.height * self.depth
    }

    /// Number of cells, or `None` if the product overflows `usize`.
    #[inline]
    #[must_use]
    pub const fn checked_volume(self) -> Option<usize> {
        match self.width.checked_mul(self.height) {
            Some(area) => area.checked_mul(self.depth),
            None => None,
        }
    }

    /// Returns true if the coordinate lies inside the volume.
    #[inline]
    #[must_use]
    pub const fn contains(self, x: usize, y: usize, z: usize) -> bool {
        x < self.width && y < self.height && z < self.depth
    }
}

/// A single frame of a voxel model: a dense grid of palette indices.
///
/// A stored value of 0 means the cell is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelVolume {
    dims: VolumeDims,
    cells: Vec<u8>,
}

impl VoxelVolume {
    /// Creates an empty volume.
    #[must_use]
    pub fn new(dims: VolumeDims) -> Self {
        Self {
            dims,
            cells: vec![0; dims.volume()],
        }
    }

    /// Creates an empty volume, or `None` if the grid cannot be allocated.
    ///
    /// Unlike [`VoxelVolume::new`] this never aborts on a cell count that
    /// overflows or exceeds what the allocator can provide.
    #[must_use]
    pub fn try_new(dims: VolumeDims) -> Option<Self> {
        let len = dims.checked_volume()?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, 0);
        Some(Self { dims, cells })
    }

    /// Returns the frame dimensions.
    #[inline]
    #[must_use]
    pub const fn dims(&self) -> VolumeDims {
        self.dims
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(self.dims.contains(x, y, z), "({x}, {y}, {z}) outside {:?}", self.dims);
        x + y * self.dims.width + z * self.dims.width * self.dims.height
    }

    /// Returns true if a voxel is present at the given position.
    ///
    /// Coordinates must lie inside [`VoxelVolume::dims`].
    #[inline]
    #[must_use]
    pub fn has_voxel_at(&self, x: usize, y: usize, z: usize) -> bool {
        self.color_index_at(x, y, z) != 0
    }

    /// Returns the palette index stored at the given position.
    ///
    /// Coordinates must lie inside [`VoxelVolume::dims`].
    #[inline]
    #[must_use]
    pub fn color_index_at(&self, x: usize, y: usize, z: usize) -> u8 {
        self.cells[self.index(x, y, z)]
    }

    /// Stores a palette index at the given position.
    ///
    /// Coordinates must lie inside [`VoxelVolume::dims`].
    #[inline]
    pub fn set_color_index_at(&mut self, x: usize, y: usize, z: usize, index: u8) {
        let idx = self.index(x, y, z);
        self.cells[idx] = index;
    }

    /// Checked variant of [`VoxelVolume::color_index_at`].
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<u8> {
        if self.dims.contains(x, y, z) {
            Some(self.color_index_at(x, y, z))
        } else {
            None
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Raw cell storage in grid order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

/// A loaded voxel model: one or more frames sharing one palette.
///
/// Frames can be animation steps or alternative models of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelModel {
    frames: Vec<VoxelVolume>,
    palette: Palette,
}

impl VoxelModel {
    /// Assembles a model from its frames and palette.
    ///
    /// Returns `None` if `frames` is empty.
    #[must_use]
    pub fn new(frames: Vec<VoxelVolume>, palette: Palette) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(Self { frames, palette })
        }
    }

    /// All frames in file order.
    #[inline]
    #[must_use]
    pub fn frames(&self) -> &[VoxelVolume] {
        &self.frames
    }

    /// Frame at `index`, if present.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&VoxelVolume> {
        self.frames.get(index)
    }

    /// Number of frames (always at least one).
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The palette shared by all frames.
    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut volume = VoxelVolume::new(VolumeDims::new(2, 3, 4));
        assert_eq!(volume.as_slice().len(), 24);

        volume.set_color_index_at(1, 2, 3, 9);
        // 1 + 2*2 + 3*2*3
        assert_eq!(volume.as_slice()[23], 9);
        assert!(volume.has_voxel_at(1, 2, 3));
        assert_eq!(volume.color_index_at(1, 2, 3), 9);

        volume.set_color_index_at(1, 0, 0, 4);
        assert_eq!(volume.as_slice()[1], 4);
        assert_eq!(volume.occupied_count(), 2);
    }

    #[test]
    fn test_empty_cells() {
        let volume = VoxelVolume::new(VolumeDims::new(1, 1, 1));
        assert!(!volume.has_voxel_at(0, 0, 0));
        assert_eq!(volume.occupied_count(), 0);
    }

    #[test]
    fn test_checked_get() {
        let mut volume = VoxelVolume::new(VolumeDims::new(2, 2, 2));
        volume.set_color_index_at(1, 1, 1, 3);
        assert_eq!(volume.get(1, 1, 1), Some(3));
        assert_eq!(volume.get(2, 0, 0), None);
        assert_eq!(volume.get(0, 2, 0), None);
        assert_eq!(volume.get(0, 0, 2), None);
    }

    #[test]
    fn test_checked_volume() {
        assert_eq!(VolumeDims::new(300, 2, 4).checked_volume(), Some(2400));
        assert_eq!(VolumeDims::new(usize::MAX, 2, 1).checked_volume(), None);
        assert_eq!(VolumeDims::new(1 << 40, 1 << 40, 1 << 40).checked_volume(), None);
    }

    #[test]
    fn test_try_new() {
        let volume = VoxelVolume::try_new(VolumeDims::new(3, 2, 1)).unwrap();
        assert_eq!(volume, VoxelVolume::new(VolumeDims::new(3, 2, 1)));
        assert!(VoxelVolume::try_new(VolumeDims::new(usize::MAX, usize::MAX, 1)).is_none());
    }

    #[test]
    fn test_model_requires_frames() {
        assert!(VoxelModel::new(Vec::new(), Palette::default()).is_none());

        let frame = VoxelVolume::new(VolumeDims::new(1, 1, 1));
        let model = VoxelModel::new(vec![frame], Palette::default()).unwrap();
        assert_eq!(model.frame_count(), 1);
        assert!(model.frame(0).is_some());
        assert!(model.frame(1).is_none());
    }
}
