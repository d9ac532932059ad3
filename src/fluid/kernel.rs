//! SPH smoothing kernels.
//!
//! Scale factors are cached per smoothing length and must be rebuilt
//! whenever h changes; the simulator does this on every reconfigure. The
//! poly6 normalization uses the h⁴ exponent, 315/(64π·h⁴); every default
//! constant in the configuration was tuned against that scale.

use std::f32::consts::PI;

/// Smoothing-kernel scale factors for a fixed support radius h.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelCoefficients {
    h: f32,
    h_sq: f32,
    poly6_scale: f32,
    spiky_grad_scale: f32,
    visc_lap_scale: f32,
}

impl KernelCoefficients {
    /// Precompute scale factors for support radius `h`. Callers validate
    /// h > 0 before construction.
    pub fn new(h: f32) -> Self {
        Self {
            h,
            h_sq: h * h,
            poly6_scale: 315.0 / (64.0 * PI * h.powi(4)),
            spiky_grad_scale: -45.0 / (PI * h.powi(6)),
            visc_lap_scale: 45.0 / (PI * h.powi(6)),
        }
    }

    pub fn support_radius(&self) -> f32 {
        self.h
    }

    pub fn support_radius_sq(&self) -> f32 {
        self.h_sq
    }

    /// Poly6 density kernel W(r², h); zero outside the support radius.
    /// Takes the squared distance so the density pass never needs a sqrt.
    pub fn poly6(&self, r_sq: f32) -> f32 {
        if r_sq >= self.h_sq {
            return 0.0;
        }
        let diff = self.h_sq - r_sq;
        self.poly6_scale * diff * diff * diff
    }

    /// Signed magnitude of the spiky pressure-gradient kernel at distance r;
    /// negative inside the support radius, zero outside.
    pub fn spiky_gradient(&self, r: f32) -> f32 {
        if r >= self.h {
            return 0.0;
        }
        let diff = self.h - r;
        self.spiky_grad_scale * diff * diff
    }

    /// Laplacian of the viscosity kernel at distance r; zero outside the
    /// support radius.
    pub fn viscosity_laplacian(&self, r: f32) -> f32 {
        if r >= self.h {
            return 0.0;
        }
        self.visc_lap_scale * (self.h - r)
    }
}
