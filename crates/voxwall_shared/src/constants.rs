//! # Format & Geometry Constants
//!
//! Numbers fixed by the `.vox` format or by the cube face table.
//! Changing any of them changes the output of every loader and mesher.

// =============================================================================
// PALETTE
// =============================================================================

/// Number of entries in a palette. Index 0 is reserved for "no voxel".
pub const PALETTE_SIZE: usize = 256;

/// Number of RGBA quadruples read from an RGBA chunk.
///
/// The stored palette keeps its last slot at the default color.
pub const FILE_PALETTE_ENTRIES: usize = 255;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Faces emitted for every occupied voxel (no culling).
pub const FACES_PER_VOXEL: usize = 6;

/// Vertices per face: two non-indexed triangles.
pub const VERTICES_PER_FACE: usize = 6;

/// Vertices emitted for one occupied voxel.
pub const VERTICES_PER_VOXEL: usize = FACES_PER_VOXEL * VERTICES_PER_FACE;

/// Floats per vertex: position (3) + color (4) + normal (3).
pub const FLOATS_PER_VERTEX: usize = 10;
