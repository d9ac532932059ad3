//! Particle state.

use glam::Vec2;

/// A single fluid particle.
///
/// Density and pressure are recomputed from neighbors every step; `force` is
/// the per-frame accumulator the integrator consumes. Particles are owned
/// exclusively by the simulator's store and mutated only by the pipeline.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub force: Vec2,
    pub density: f32,
    /// Signed: the linear equation of state goes negative under expansion.
    pub pressure: f32,
}

impl Particle {
    /// A particle at rest at `position`, untouched by any pass yet.
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            density: 0.0,
            pressure: 0.0,
        }
    }
}
