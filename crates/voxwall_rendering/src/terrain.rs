//! Procedural voxel terrain mesher.
//!
//! A height field of unit voxels, one per `(x, z)` column. The noise
//! function is supplied by the caller through [`HeightSampler`].

use voxwall_shared::{Vec3, VERTICES_PER_VOXEL};

use crate::config::{ConfigError, TerrainConfig};
use crate::face::push_cube;
use crate::vertex::VoxelMesh;

/// A 2D noise source returning values in `[-1, 1]`.
pub trait HeightSampler {
    /// Samples the noise at `(x, z)`.
    fn sample(&self, x: f64, z: f64) -> f64;
}

impl<F> HeightSampler for F
where
    F: Fn(f64, f64) -> f64,
{
    fn sample(&self, x: f64, z: f64) -> f64 {
        self(x, z)
    }
}

/// Output of the terrain mesher.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainMesh {
    /// Voxel-space geometry; one unit per voxel.
    pub mesh: VoxelMesh,
    /// Uniform scale mapping voxel units to meters.
    pub scale: f32,
    /// Columns along X.
    pub voxel_width: usize,
    /// Columns along Z.
    pub voxel_depth: usize,
}

/// Builds height-field meshes from a [`TerrainConfig`].
#[derive(Debug, Clone, Copy)]
pub struct TerrainMesher {
    config: TerrainConfig,
    voxel_width: usize,
    voxel_depth: usize,
}

impl TerrainMesher {
    /// Create a mesher for the given terrain parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the config does not validate,
    /// including a terrain too large to mesh.
    pub fn new(config: TerrainConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (voxel_width, voxel_depth) = config.voxel_extent()?;
        Ok(Self {
            config,
            voxel_width,
            voxel_depth,
        })
    }

    /// Terrain parameters.
    #[must_use]
    pub const fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Columns along X and Z.
    #[must_use]
    pub const fn voxel_extent(&self) -> (usize, usize) {
        (self.voxel_width, self.voxel_depth)
    }

    /// Height of column `(ix, iz)` in voxel units.
    ///
    /// The sampler is evaluated at the column's normalized position plus
    /// half a voxel, scaled to meters and by the frequency; its `[-1, 1]`
    /// output is remapped to `[0, amplitude]` meters.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn column_height<S: HeightSampler + ?Sized>(
        &self,
        sampler: &S,
        ix: usize,
        iz: usize,
    ) -> f32 {
        let cfg = &self.config;
        let (voxel_width, voxel_depth) = self.voxel_extent();
        let half_voxel = f64::from(cfg.voxel_size()) / 2.0;

        let sample_x = (ix as f64 / voxel_width as f64 + half_voxel) * f64::from(cfg.width);
        let sample_z = (iz as f64 / voxel_depth as f64 + half_voxel) * f64::from(cfg.depth);

        let noise = sampler.sample(
            sample_x * f64::from(cfg.frequency),
            sample_z * f64::from(cfg.frequency),
        );
        let normalized = (noise + 1.0) / 2.0;
        (normalized * f64::from(cfg.amplitude) * f64::from(cfg.voxel_scale)) as f32
    }

    /// Generate the terrain mesh: one cube per column, all six faces.
    #[allow(clippy::cast_precision_loss)]
    pub fn build<S: HeightSampler + ?Sized>(&self, sampler: &S) -> TerrainMesh {
        let (voxel_width, voxel_depth) = self.voxel_extent();
        let capacity = voxel_width
            .checked_mul(voxel_depth)
            .and_then(|columns| columns.checked_mul(VERTICES_PER_VOXEL))
            .unwrap_or(0);
        let mut mesh = VoxelMesh::with_capacity(capacity);

        for ix in 0..voxel_width {
            for iz in 0..voxel_depth {
                let height = self.column_height(sampler, ix, iz);
                let translation = Vec3::new(ix as f32, height, iz as f32);
                push_cube(&mut mesh.vertices, translation, self.config.color);
            }
        }

        tracing::debug!(
            voxel_width,
            voxel_depth,
            vertices = mesh.vertex_count(),
            "built terrain mesh"
        );

        TerrainMesh {
            mesh,
            scale: self.config.voxel_size(),
            voxel_width,
            voxel_depth,
        }
    }
}
