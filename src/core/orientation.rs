// src/core/orientation.rs

use num_complex::Complex;
use serde::Serialize;
use std::fmt;

/// Bloch-sphere coordinates of a single-qubit state.
///
/// For `a|0⟩ + b|1⟩`:
/// `x = 2·Re(conj(a)·b)`, `y = 2·Im(conj(a)·b)`, `z = |a|² − |b|²`.
/// A normalized state always lands on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlochVector {
    /// Component along the x axis.
    pub x: f64,
    /// Component along the y axis.
    pub y: f64,
    /// Component along the z axis (`+1` is Heads, `-1` is Tails).
    pub z: f64,
}

impl BlochVector {
    /// Builds a vector from raw components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Derives the coordinates from an amplitude pair.
    pub fn from_amplitudes(a: Complex<f64>, b: Complex<f64>) -> Self {
        let coherence = a.conj() * b;
        Self {
            x: 2.0 * coherence.re,
            y: 2.0 * coherence.im,
            z: a.norm_sqr() - b.norm_sqr(),
        }
    }

    /// Components as `[x, y, z]`.
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Polar angle θ in [0, π], measured from +z.
    pub fn polar_angle(&self) -> f64 {
        self.z.clamp(-1.0, 1.0).acos()
    }

    /// Azimuthal angle φ in (−π, π], measured from +x in the xy plane.
    pub fn azimuthal_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", p, self.x, p, self.y, p, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    const TEST_TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_basis_states() {
        let up = BlochVector::from_amplitudes(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0));
        assert_eq!(up.components(), [0.0, 0.0, 1.0]);
        let down = BlochVector::from_amplitudes(Complex::new(0.0, 0.0), Complex::new(1.0, 0.0));
        assert_eq!(down.components(), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn test_imaginary_superposition_points_along_y() {
        let v = BlochVector::from_amplitudes(
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(0.0, FRAC_1_SQRT_2),
        );
        assert!(v.x.abs() < TEST_TOLERANCE);
        assert!((v.y - 1.0).abs() < TEST_TOLERANCE);
        assert!(v.z.abs() < TEST_TOLERANCE);
        assert!((v.azimuthal_angle() - FRAC_PI_2).abs() < TEST_TOLERANCE);
        assert!((v.polar_angle() - FRAC_PI_2).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn test_display() {
        assert_eq!(BlochVector::new(0.0, 0.0, 1.0).to_string(), "(0.000, 0.000, 1.000)");
    }
}
