//! Simulation configuration.
//!
//! All physical constants and world bounds live here. Values are validated
//! once, fail-fast, before the simulator ever steps; the pipeline itself
//! assumes a valid configuration and divides by mass-derived quantities
//! without further checks.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fluid::Bounds;

/// Physical constants and world bounds for a simulation run.
///
/// Immutable while the simulation is stepping; swapped out only at a reset
/// boundary via [`crate::FluidSimulator::reconfigure`]. Missing fields in a
/// TOML document fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Mass shared by every particle. Must be positive.
    pub particle_mass: f32,
    /// Density the equation of state treats as unstressed.
    pub rest_density: f32,
    /// Stiffness of the linear equation of state.
    pub gas_constant: f32,
    /// Viscosity coefficient.
    pub viscosity: f32,
    /// Smoothing kernel support radius h. Must be positive.
    pub smoothing_length: f32,
    /// Collision/boundary geometry radius, independent of h. Must be positive.
    pub particle_radius: f32,
    /// Velocity cap applied after integration, and (scaled by density) to
    /// accumulated forces.
    pub max_velocity: f32,
    /// Fraction of velocity retained on a boundary bounce, in [0, 1].
    pub damping: f32,
    /// Body acceleration, screen coordinates (+y is down).
    pub gravity: Vec2,
    /// World rectangle particles are confined to.
    pub bounds: Bounds,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_mass: 5.0,
            rest_density: 1000.0,
            gas_constant: 100.0,
            viscosity: 7000.0,
            smoothing_length: 15.0,
            particle_radius: 5.0,
            max_velocity: 300.0,
            damping: 0.4,
            gravity: Vec2::new(0.0, 981.0),
            bounds: Bounds::new(24.0, 24.0, 752.0, 552.0),
        }
    }
}

impl SimConfig {
    /// Reject physically meaningless values before they can reach the
    /// pipeline as a division fault.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smoothing_length <= 0.0 {
            return Err(ConfigError::NonPositiveSmoothingLength(
                self.smoothing_length,
            ));
        }
        if self.particle_mass <= 0.0 {
            return Err(ConfigError::NonPositiveParticleMass(self.particle_mass));
        }
        if self.particle_radius <= 0.0 {
            return Err(ConfigError::NonPositiveParticleRadius(self.particle_radius));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ConfigError::DampingOutOfRange(self.damping));
        }
        let extent = self.bounds.extent();
        if extent.x <= 0.0 || extent.y <= 0.0 {
            return Err(ConfigError::DegenerateBounds(extent.x, extent.y));
        }
        Ok(())
    }

    /// Parse and validate a TOML document; absent keys use the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

/// Errors produced while loading or validating a [`SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("smoothing length must be positive, got {0}")]
    NonPositiveSmoothingLength(f32),
    #[error("particle mass must be positive, got {0}")]
    NonPositiveParticleMass(f32),
    #[error("particle radius must be positive, got {0}")]
    NonPositiveParticleRadius(f32),
    #[error("damping must lie in [0, 1], got {0}")]
    DampingOutOfRange(f32),
    #[error("world bounds must have positive extent, got {0}x{1}")]
    DegenerateBounds(f32, f32),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
