//! Semi-implicit Euler integration and boundary reflection.

use crate::config::SimConfig;
use crate::fluid::particle::Particle;

/// Third pass: velocity from force, clamp, position from velocity, then
/// reflection off the world bounds with damping.
///
/// The velocity clamp runs every step no matter what came before it:
/// `shake` can inject speeds far past anything the force cap allows. Axes
/// are reflected independently; a corner contact triggers both in the same
/// step. Callers run the density pass first, so density is never zero here.
pub fn integrate(particles: &mut [Particle], config: &SimConfig, dt: f32) {
    let bounds = config.bounds;
    let radius = config.particle_radius;

    for p in particles.iter_mut() {
        p.velocity += p.force / p.density * dt;

        let speed = p.velocity.length();
        if speed > config.max_velocity {
            p.velocity *= config.max_velocity / speed;
        }

        p.position += p.velocity * dt;

        if p.position.x + radius < bounds.min.x {
            p.position.x = bounds.min.x - radius;
            p.velocity.x *= -config.damping;
        }
        if p.position.x + radius > bounds.max.x {
            p.position.x = bounds.max.x - radius;
            p.velocity.x *= -config.damping;
        }
        if p.position.y + radius < bounds.min.y {
            p.position.y = bounds.min.y - radius;
            p.velocity.y *= -config.damping;
        }
        if p.position.y + radius > bounds.max.y {
            p.position.y = bounds.max.y - radius;
            p.velocity.y *= -config.damping;
        }
    }
}
