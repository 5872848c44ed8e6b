//! # VOXWALL Rendering
//!
//! CPU-side mesh generation for voxel models and procedural terrain.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    MESH PIPELINE                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  VoxelVolume + Palette → MeshBuilder   → VoxelMesh          │
//! │  TerrainConfig + noise → TerrainMesher → TerrainMesh        │
//! │                              ↓                               │
//! │                  FACE_TABLE (6 faces × 6 vertices)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Meshes are flat, non-indexed triangle lists of [`Vertex`] values.
//! Uploading them is up to whatever owns the rendering context.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod cube;
pub mod face;
pub mod mesher;
pub mod terrain;
pub mod vertex;

pub use config::{ConfigError, TerrainConfig, MAX_TERRAIN_COLUMNS};
pub use cube::{cube_mesh, CUBE_COLOR};
pub use face::{Face, FaceGeometry, FACE_TABLE};
pub use mesher::MeshBuilder;
pub use terrain::{HeightSampler, TerrainMesh, TerrainMesher};
pub use vertex::{Vertex, VoxelMesh};
