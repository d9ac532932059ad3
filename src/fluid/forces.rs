//! Density, pressure, and force passes.
//!
//! Both passes are brute force over all particle pairs; the pipeline targets
//! hundreds of particles, not thousands. The force pass also hosts the
//! discrete collision correction, which is gated on overlap rather than the
//! kernel support radius.

use glam::Vec2;

use crate::config::SimConfig;
use crate::fluid::kernel::KernelCoefficients;
use crate::fluid::particle::Particle;
use crate::fluid::{DISTANCE_EPSILON, RESTITUTION};

/// First pass: density from the poly6 kernel over every neighbor, self
/// included (the r = 0 term keeps density strictly positive), then pressure
/// from the linear equation of state. Negative pressure is valid and
/// represents expansion.
pub fn compute_density_pressure(
    particles: &mut [Particle],
    config: &SimConfig,
    kernels: &KernelCoefficients,
) {
    for i in 0..particles.len() {
        let pos_i = particles[i].position;
        let mut density = 0.0;
        for pj in particles.iter() {
            let r_sq = (pos_i - pj.position).length_squared();
            density += config.particle_mass * kernels.poly6(r_sq);
        }
        particles[i].density = density;
        particles[i].pressure = config.gas_constant * (density - config.rest_density);
    }
}

/// Second pass: pressure, viscosity, and gravity body force per particle,
/// with the collision correction evaluated in the same pairwise loop.
///
/// Requires the density pass to have run for every particle first; both
/// densities of a pair are read here.
pub fn compute_forces(
    particles: &mut [Particle],
    config: &SimConfig,
    kernels: &KernelCoefficients,
) {
    let contact_distance = 2.0 * config.particle_radius;

    for i in 0..particles.len() {
        let mut pressure_force = Vec2::ZERO;
        let mut viscosity_force = Vec2::ZERO;

        for j in 0..particles.len() {
            if i == j {
                continue;
            }

            let diff = particles[i].position - particles[j].position;
            let r = diff.length();

            if r > DISTANCE_EPSILON && r < kernels.support_radius() {
                let normal = diff / r;
                let shared_pressure = (particles[i].pressure + particles[j].pressure)
                    / (2.0 * particles[i].density * particles[j].density);
                pressure_force += normal
                    * (config.particle_mass * shared_pressure * kernels.spiky_gradient(r));
                viscosity_force += (particles[j].velocity - particles[i].velocity)
                    * (config.particle_mass * config.viscosity / particles[j].density
                        * kernels.viscosity_laplacian(r));
            }

            // Overlapping pair: impulse-based elastic correction. Coincident
            // particles have no usable normal, so the distance guard applies
            // here as well.
            if r > DISTANCE_EPSILON && r < contact_distance {
                let normal = diff / r;
                let relative_velocity = particles[i].velocity - particles[j].velocity;
                let approach = relative_velocity.dot(normal);

                if approach < 0.0 {
                    // Equal masses: each particle takes half the impulse.
                    let impulse = -(1.0 + RESTITUTION) * approach / 2.0;
                    let separation = normal * ((contact_distance - r) * 0.5);

                    particles[i].velocity += normal * impulse;
                    particles[j].velocity -= normal * impulse;
                    particles[i].position += separation;
                    particles[j].position -= separation;

                    // The impulse replaces the continuous model for this
                    // frame: both accumulated forces are discarded wholesale,
                    // not just this pair's contribution.
                    particles[i].force = Vec2::ZERO;
                    particles[j].force = Vec2::ZERO;
                }
            }
        }

        let mut force =
            pressure_force + viscosity_force + config.gravity * particles[i].density;

        // Stability heuristic, not physics: cap |force| at max_velocity
        // scaled by density so the velocity update stays bounded.
        let limit = config.max_velocity * particles[i].density;
        let magnitude = force.length();
        if magnitude > limit {
            force *= limit / magnitude;
        }
        particles[i].force = force;
    }
}
