//! Real-time 2D SPH fluid simulation core.
//!
//! Particles carry density and pressure computed from their neighbors each
//! step; pressure, viscosity, and gravity forces drive a semi-implicit Euler
//! integrator that reflects particles off the world bounds and resolves
//! inter-particle overlap with an impulse-based elastic correction. The
//! [`FluidSimulator`] controller owns the particle store and exposes the
//! command surface the outer application (input, rendering) drives.

pub mod config;
pub mod fluid;

pub use config::{ConfigError, SimConfig};
pub use fluid::{Bounds, Direction, FluidSimulator, Particle, ParticleView, SimStats};
