//! Simulation controller.
//!
//! [`FluidSimulator`] owns the particle store and is the only entry point
//! the outer application (input handling, rendering) talks to. It runs the
//! three-pass pipeline, dispenses commands to the store, and produces the
//! render-facing snapshot. All randomness flows through one seeded RNG so a
//! fixed seed replays a command sequence exactly.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ConfigError, SimConfig};
use crate::fluid::kernel::KernelCoefficients;
use crate::fluid::particle::Particle;
use crate::fluid::{forces, integrate, PRESSURE_FLOOR, SHAKE_IMPULSE_MAX};

/// Cardinal direction for the wind and shake commands, screen coordinates
/// (up is -y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    fn from_index(index: u32) -> Self {
        match index % 4 {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }
}

/// Render-facing view of one particle: position plus pressure normalized
/// into [0, 1] by the frame's maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub position: Vec2,
    pub pressure: f32,
}

/// Counters the driver logs periodically; not part of the render path.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimStats {
    pub steps: u64,
    pub particles: usize,
    pub max_pressure: f32,
}

/// Owns the particle store and runs the fixed three-pass pipeline.
pub struct FluidSimulator {
    config: SimConfig,
    kernels: KernelCoefficients,
    particles: Vec<Particle>,
    rng: StdRng,
    stats: SimStats,
}

impl FluidSimulator {
    /// Validate `config` and build a simulator whose randomness (shake,
    /// seeding jitter) derives entirely from `seed`.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let kernels = KernelCoefficients::new(config.smoothing_length);
        Ok(Self {
            config,
            kernels,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            stats: SimStats::default(),
        })
    }

    /// Swap configuration at a reset boundary. Kernel coefficients are
    /// rebuilt since the smoothing length may have changed; on error the
    /// previous configuration stays in effect.
    pub fn reconfigure(&mut self, config: SimConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.kernels = KernelCoefficients::new(config.smoothing_length);
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Read-only view of the store, for tests and diagnostics. The render
    /// collaborator reads [`FluidSimulator::snapshot`] instead.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Append a resting particle. No overlap check: callers control spacing
    /// when seeding.
    pub fn add_particle(&mut self, position: Vec2) {
        self.particles.push(Particle::at_rest(position));
    }

    /// Seed a rows × cols grid with per-particle jitter in {-1, 0, +1} on
    /// each axis. The grid origin sits a quarter of the way into the bounds.
    pub fn seed_grid(&mut self, rows: u32, cols: u32, spacing: f32) {
        let origin = self.config.bounds.min + self.config.bounds.extent() * 0.25;
        for row in 0..rows {
            for col in 0..cols {
                let jitter = Vec2::new(
                    self.rng.gen_range(-1..=1i32) as f32,
                    self.rng.gen_range(-1..=1i32) as f32,
                );
                let offset = Vec2::new(col as f32, row as f32) * spacing;
                self.add_particle(origin + offset + jitter);
            }
        }
        log::info!(
            "[FluidSimulator] seeded {}x{} grid, {} particles live",
            rows,
            cols,
            self.particles.len()
        );
    }

    /// Remove every particle. Updating an empty store is a safe no-op.
    pub fn clear(&mut self) {
        self.particles.clear();
        log::debug!("[FluidSimulator] cleared all particles");
    }

    /// Stress hook: kick every particle in a random cardinal direction with
    /// a random impulse in [0, SHAKE_IMPULSE_MAX). The integrator's velocity
    /// clamp reins the result back in on the next step.
    pub fn shake(&mut self) {
        for p in &mut self.particles {
            let direction = Direction::from_index(self.rng.gen_range(0..4u32));
            let magnitude = self.rng.gen_range(0.0..SHAKE_IMPULSE_MAX);
            p.velocity += direction.unit() * magnitude;
        }
        log::debug!(
            "[FluidSimulator] shook {} particles",
            self.particles.len()
        );
    }

    /// Add a one-off velocity delta toward `direction` to every particle.
    pub fn wind(&mut self, direction: Direction, force: f32) {
        let delta = direction.unit() * force;
        for p in &mut self.particles {
            p.velocity += delta;
        }
    }

    /// Advance one step: density/pressure, then forces, then integration.
    /// The passes are strictly ordered: the force pass reads densities the
    /// first pass wrote for every particle.
    pub fn update(&mut self, dt: f32) {
        forces::compute_density_pressure(&mut self.particles, &self.config, &self.kernels);
        forces::compute_forces(&mut self.particles, &self.config, &self.kernels);
        integrate::integrate(&mut self.particles, &self.config, dt);

        self.stats.steps += 1;
        self.stats.particles = self.particles.len();
        self.stats.max_pressure = self.max_pressure();
    }

    /// Render-facing output: positions plus pressure normalized by the
    /// current frame's maximum. The floor keeps the division defined when
    /// every pressure is at or below zero; negative pressures clamp to 0.
    pub fn snapshot(&self) -> Vec<ParticleView> {
        let scale = self.max_pressure().max(PRESSURE_FLOOR);
        self.particles
            .iter()
            .map(|p| ParticleView {
                position: p.position,
                pressure: (p.pressure / scale).clamp(0.0, 1.0),
            })
            .collect()
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    fn max_pressure(&self) -> f32 {
        self.particles
            .iter()
            .map(|p| p.pressure)
            .fold(0.0, f32::max)
    }
}
