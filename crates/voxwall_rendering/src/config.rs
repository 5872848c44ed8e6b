//! # Terrain Configuration
//!
//! Terrain parameters live in a TOML file and are loaded once at startup.
//!
//! ```toml
//! width = 16.0        # meters
//! depth = 16.0        # meters
//! voxel_scale = 2.0   # voxels per meter
//! frequency = 0.1
//! amplitude = 4.0     # meters
//! color = { r = 0.0, g = 1.0, b = 0.0, a = 1.0 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use voxwall_shared::Color;

/// Largest number of `(x, z)` columns a terrain may span.
pub const MAX_TERRAIN_COLUMNS: usize = 1 << 20;

/// Errors that can occur while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its valid range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Procedural terrain parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Terrain width in meters.
    pub width: f32,
    /// Terrain depth in meters.
    pub depth: f32,
    /// Voxel resolution in voxels per meter.
    pub voxel_scale: f32,
    /// Frequency the noise source is sampled at.
    pub frequency: f32,
    /// Highest possible height value, in meters.
    pub amplitude: f32,
    /// Color of every terrain voxel.
    pub color: Color,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 16.0,
            depth: 16.0,
            voxel_scale: 2.0,
            frequency: 0.1,
            amplitude: 4.0,
            color: Color::GREEN,
        }
    }
}

impl TerrainConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise
    /// any error of [`TerrainConfig::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("depth", self.depth),
            ("voxel_scale", self.voxel_scale),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.amplitude.is_finite() && self.amplitude >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "amplitude must not be negative, got {}",
                self.amplitude
            )));
        }
        if !self.frequency.is_finite() {
            return Err(ConfigError::Invalid("frequency must be finite".to_owned()));
        }
        self.voxel_extent().map(|_| ())
    }

    /// Columns along X and Z, truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the terrain spans more than
    /// [`MAX_TERRAIN_COLUMNS`] columns.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn voxel_extent(&self) -> Result<(usize, usize), ConfigError> {
        let columns_x = f64::from(self.width * self.voxel_scale).floor();
        let columns_z = f64::from(self.depth * self.voxel_scale).floor();

        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_TERRAIN_COLUMNS as f64;
        // Also rejects NaN and infinite extents.
        if !(columns_x >= 0.0 && columns_z >= 0.0 && columns_x * columns_z <= limit) {
            return Err(ConfigError::Invalid(format!(
                "terrain of {columns_x}x{columns_z} columns exceeds {MAX_TERRAIN_COLUMNS}"
            )));
        }
        Ok((columns_x as usize, columns_z as usize))
    }

    /// Size of a single voxel, in meters.
    #[must_use]
    pub fn voxel_size(&self) -> f32 {
        1.0 / self.voxel_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TerrainConfig::from_toml_str(
            r#"
            width = 8.0
            depth = 4.0
            voxel_scale = 1.0
            frequency = 0.5
            amplitude = 2.0
            color = { r = 0.5, g = 0.5, b = 0.5, a = 1.0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.width, 8.0);
        assert_eq!(config.depth, 4.0);
        assert_eq!(config.color, Color::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = TerrainConfig::from_toml_str("amplitude = 10.0").unwrap();
        assert_eq!(config.amplitude, 10.0);
        assert_eq!(config.width, TerrainConfig::default().width);
        assert_eq!(config.color, Color::GREEN);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for text in ["width = 0.0", "depth = -1.0", "voxel_scale = 0.0", "amplitude = -2.0"] {
            let err = TerrainConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{text}");
        }
    }

    #[test]
    fn test_malformed_toml() {
        let err = TerrainConfig::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TerrainConfig::from_file("/nonexistent/terrain.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_oversized_terrain_rejected() {
        let err = TerrainConfig::from_toml_str("width = 1.0e20\ndepth = 1.0e20").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        // 1024 x 2048 columns is twice the limit.
        let config = TerrainConfig {
            width: 512.0,
            depth: 1024.0,
            ..TerrainConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_voxel_extent() {
        let config = TerrainConfig {
            width: 3.7,
            depth: 2.0,
            voxel_scale: 1.0,
            ..TerrainConfig::default()
        };
        assert_eq!(config.voxel_extent().unwrap(), (3, 2));

        let edge = TerrainConfig {
            width: 512.0,
            depth: 512.0,
            ..TerrainConfig::default()
        };
        assert_eq!(edge.voxel_extent().unwrap(), (1024, 1024));
    }

    #[test]
    fn test_voxel_size() {
        let config = TerrainConfig { voxel_scale: 4.0, ..TerrainConfig::default() };
        assert_eq!(config.voxel_size(), 0.25);
    }
}
