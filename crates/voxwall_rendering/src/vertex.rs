//! Vertex format and mesh container.

use bytemuck::{Pod, Zeroable};
use voxwall_shared::{Color, Vec3, FLOATS_PER_VERTEX, VERTICES_PER_FACE};

// =============================================================================
// VERTEX FORMAT - position, color, normal
// =============================================================================

/// A single mesh vertex: 10 floats, tightly packed.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position [x, y, z]
    pub position: [f32; 3],
    /// Color [r, g, b, a]
    pub color: [f32; 4],
    /// Normal direction [nx, ny, nz]
    pub normal: [f32; 3],
}

impl Vertex {
    /// Total size of a vertex, in floats
    pub const SIZE: usize = FLOATS_PER_VERTEX;
    /// Offset of the position, in floats
    pub const OFFSET_POSITION: usize = 0;
    /// Offset of the color, in floats
    pub const OFFSET_COLOR: usize = 3;
    /// Offset of the normal, in floats
    pub const OFFSET_NORMAL: usize = 7;

    /// Creates a vertex.
    #[inline]
    #[must_use]
    pub const fn new(position: Vec3, color: Color, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
            normal: normal.to_array(),
        }
    }
}

// =============================================================================
// MESH OUTPUT - non-indexed triangle list
// =============================================================================

/// Flat triangle list: every three vertices form one triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoxelMesh {
    /// Vertex data in emission order
    pub vertices: Vec<Vertex>,
}

impl VoxelMesh {
    /// Creates an empty mesh with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
        }
    }

    /// Check if mesh is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get vertex count
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Get face count (two triangles each)
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_FACE
    }

    /// Interleaved float view, `Vertex::SIZE` floats per vertex.
    #[must_use]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes for upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
