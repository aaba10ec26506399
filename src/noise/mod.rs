//! Coherent noise used to drive spatial distortion.

pub mod perlin;

pub use perlin::PerlinNoise;

/// Smooth, deterministic scalar field over the plane.
pub trait NoiseField {
    /// Sample the field at `(x, y)`. Equal inputs give equal outputs.
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> NoiseField for F {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
