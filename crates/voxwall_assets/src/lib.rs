//! # VOXWALL Assets
//!
//! Decodes MagicaVoxel `.vox` files into an in-memory voxel model.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ASSET PIPELINE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  raw bytes → ByteCursor → MagicaVoxelLoader → VoxelModel     │
//! │                    ↓                             ↓           │
//! │               ChunkKind               frames + Palette       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - The whole file is read into memory before parsing
//! - The chunk sequence is fixed; unknown chunks are fatal
//! - The first failure aborts the load, no partial model is returned
//! - This crate installs no tracing subscriber; logging output is the
//!   caller's choice
//!
//! ## Example
//!
//! ```rust,ignore
//! let bytes = std::fs::read("assets/models/tree.vox")?;
//! let model = voxwall_assets::load(&bytes)?;
//! let first = &model.frames()[0];
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod chunk;
pub mod cursor;
pub mod error;
pub mod model;
pub mod palette;
pub mod vox_loader;

pub use chunk::ChunkKind;
pub use cursor::ByteCursor;
pub use error::{VoxError, VoxErrorKind, VoxResult};
pub use model::{VolumeDims, VoxelModel, VoxelVolume};
pub use palette::Palette;
pub use vox_loader::{load, MagicaVoxelLoader, VoxelModelLoader, VOX_MAGIC};
