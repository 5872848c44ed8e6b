//! # VOXWALL Shared
//!
//! Value types used by both the `.vox` loader and the mesh builders.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `wgpu`
//! - Any GPU or window-related crate
//!
//! Mesh output has to stay a plain value that any thread can hand to
//! whatever owns the rendering context.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use constants::{
    FACES_PER_VOXEL, FILE_PALETTE_ENTRIES, FLOATS_PER_VERTEX, PALETTE_SIZE, VERTICES_PER_FACE,
    VERTICES_PER_VOXEL,
};
pub use math::{Color, Vec3};
