//! Single unit cube mesh.

use voxwall_shared::{Color, Vec3, VERTICES_PER_VOXEL};

use crate::face::push_cube;
use crate::vertex::VoxelMesh;

/// Default cube color: a muted green.
pub const CUBE_COLOR: Color = Color::new(0.09, 0.59, 0.13, 1.0);

/// Builds one unit cube spanning `[0,1]³`, all faces in `color`.
#[must_use]
pub fn cube_mesh(color: Color) -> VoxelMesh {
    let mut mesh = VoxelMesh::with_capacity(VERTICES_PER_VOXEL);
    push_cube(&mut mesh.vertices, Vec3::ZERO, color);
    mesh
}
