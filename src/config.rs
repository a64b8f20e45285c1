//! Simulation configuration
//!
//! Loaded from JSON; any missing field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_CUBES_PER_AXIS, MAX_REPOSITION_EXTENT};
use crate::error::ConfigError;

/// Portal placement and size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Initial centre on the horizon plane
    pub x: f32,
    pub z: f32,
    /// Horizontal collision radius
    pub threshold: f32,
    /// Oval half-extents for drawing (x and z)
    pub width: f32,
    pub height: f32,
    /// On scene reset the portal moves to a random point in `±reposition_extent`
    pub reposition_extent: f32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            z: 0.0,
            threshold: 1.5,
            width: 2.0,
            height: 1.0,
            reposition_extent: 10.0,
        }
    }
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of cubes along each axis
    pub cube_count_per_axis: u32,
    /// Distance between neighbouring lattice positions
    pub spacing: f32,
    /// Height of the ground plane
    pub horizon_y: f32,
    /// Destruction passes per second
    pub max_destruction_rate: f32,
    /// Time a destroyed cube holds still before flying off
    pub cube_flash_duration: f32,

    // === Effects ===
    /// Screen shake length after a hit
    pub shake_duration: f32,
    /// Red flash length after a hit
    pub flash_duration: f32,
    /// Full-screen fade length on grid or scene reset
    pub fade_duration: f32,

    /// Scene sway (degrees per second, applied on all three axes)
    pub rotation_speed: f32,

    pub portal: PortalConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cube_count_per_axis: 5,
            spacing: 1.0,
            horizon_y: -5.0,
            max_destruction_rate: 0.5,
            cube_flash_duration: 0.2,

            shake_duration: 0.5,
            flash_duration: 0.3,
            fade_duration: 1.0,

            rotation_speed: 1.0,

            portal: PortalConfig::default(),
        }
    }
}

impl SimConfig {
    /// Config for an `n`-per-axis grid, everything else default
    pub fn with_grid(cube_count_per_axis: u32, spacing: f32) -> Self {
        Self {
            cube_count_per_axis,
            spacing,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Seconds between destruction passes
    pub fn destruction_interval(&self) -> f32 {
        1.0 / self.max_destruction_rate
    }

    /// Check every parameter the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CUBES_PER_AXIS).contains(&self.cube_count_per_axis) {
            return Err(ConfigError::InvalidGridSize(self.cube_count_per_axis));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing(self.spacing));
        }
        if !self.horizon_y.is_finite() {
            return Err(ConfigError::NonFiniteHorizon(self.horizon_y));
        }
        if !(self.max_destruction_rate.is_finite() && self.max_destruction_rate > 0.0) {
            return Err(ConfigError::NonPositiveRate(self.max_destruction_rate));
        }

        let durations = [
            ("cube_flash_duration", self.cube_flash_duration),
            ("shake_duration", self.shake_duration),
            ("flash_duration", self.flash_duration),
            ("fade_duration", self.fade_duration),
        ];
        for (name, value) in durations {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeDuration { name, value });
            }
        }
        if !self.rotation_speed.is_finite() {
            return Err(ConfigError::NonFiniteRotationSpeed(self.rotation_speed));
        }

        let portal = &self.portal;
        if !(portal.threshold.is_finite() && portal.threshold > 0.0) {
            return Err(ConfigError::NonPositiveThreshold(portal.threshold));
        }
        for (name, value) in [("width", portal.width), ("height", portal.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositivePortalSize { name, value });
            }
        }
        // Repositioning samples from [-extent, extent]; that span must stay finite
        let extent = portal.reposition_extent;
        if !(extent.is_finite() && extent.abs() <= MAX_REPOSITION_EXTENT) {
            return Err(ConfigError::NonFiniteExtent(extent));
        }

        Ok(())
    }
}
