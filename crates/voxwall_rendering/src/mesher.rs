//! Voxel Mesher - one cube per occupied voxel
//!
//! Walks a volume and expands every occupied cell into six faces from
//! [`FACE_TABLE`](crate::face::FACE_TABLE). Faces between two occupied
//! neighbors are NOT removed: the output is always `36 × occupied` vertices.
//!
//! Iteration order is x outer, y middle, z inner; within a voxel the faces
//! follow the table order. Both are part of the output contract.

use voxwall_assets::{Palette, VoxResult, VoxelModel, VoxelVolume};
use voxwall_shared::{Vec3, VERTICES_PER_VOXEL};

use crate::face::push_cube;
use crate::vertex::VoxelMesh;

/// Builds triangle meshes from voxel volumes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshBuilder;

impl MeshBuilder {
    /// Create a new mesh builder
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate the mesh of one frame.
    ///
    /// Each voxel is a 1×1×1 cube translated by `(x - width/2, y, z - depth/2)`,
    /// so the model is centered horizontally and rests on `y = 0`.
    ///
    /// # Errors
    ///
    /// Fails only if the palette lookup fails, which cannot happen for the
    /// nonzero indices that are looked up.
    #[allow(clippy::cast_precision_loss)]
    pub fn build(&self, volume: &VoxelVolume, palette: &Palette) -> VoxResult<VoxelMesh> {
        let dims = volume.dims();
        let mut mesh = VoxelMesh::with_capacity(volume.occupied_count() * VERTICES_PER_VOXEL);

        let half_width = dims.width as f32 / 2.0;
        let half_depth = dims.depth as f32 / 2.0;

        for x in 0..dims.width {
            for y in 0..dims.height {
                for z in 0..dims.depth {
                    let index = volume.color_index_at(x, y, z);
                    if index == 0 {
                        continue;
                    }

                    let color = palette.color_at(index)?;
                    let translation =
                        Vec3::new(x as f32 - half_width, y as f32, z as f32 - half_depth);
                    push_cube(&mut mesh.vertices, translation, color);
                }
            }
        }

        tracing::debug!(
            vertices = mesh.vertex_count(),
            width = dims.width,
            height = dims.height,
            depth = dims.depth,
            "built voxel mesh"
        );
        Ok(mesh)
    }

    /// Generate one mesh per frame of a model, in frame order.
    ///
    /// # Errors
    ///
    /// See [`MeshBuilder::build`].
    pub fn build_model(&self, model: &VoxelModel) -> VoxResult<Vec<VoxelMesh>> {
        model
            .frames()
            .iter()
            .map(|frame| self.build(frame, model.palette()))
            .collect()
    }
}
