//! 2D SPH fluid simulation.
//!
//! Three fixed passes run per step: density/pressure over all particles,
//! pairwise forces (with a discrete collision correction in the same loop),
//! then semi-implicit Euler integration against the world bounds. The
//! density pass must finish for every particle before the force pass reads
//! any neighbor's density; neighbor search is brute force over all pairs.

pub mod bounds;
pub mod forces;
pub mod integrate;
pub mod kernel;
pub mod particle;
pub mod simulator;

pub use bounds::Bounds;
pub use kernel::KernelCoefficients;
pub use particle::Particle;
pub use simulator::{Direction, FluidSimulator, ParticleView, SimStats};

/// Timestep the simulation is tuned for (one display frame).
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Fraction of approach velocity returned by an inter-particle collision.
pub const RESTITUTION: f32 = 0.8;

/// Distances below this are treated as coincident; guards every division
/// by an inter-particle distance.
pub const DISTANCE_EPSILON: f32 = 1e-4;

/// Floor for the per-frame maximum pressure used to normalize render output.
pub const PRESSURE_FLOOR: f32 = 1e-4;

/// Upper bound (exclusive) of the random impulse magnitude `shake` applies.
pub const SHAKE_IMPULSE_MAX: f32 = 10_000.0;
