// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use serde::Serialize;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use super::constants::NORM_TOLERANCE;
use super::error::{CoinError, Result};
use super::orientation::BlochVector;

/// A single qubit in superposition: `a|0⟩ + b|1⟩`.
///
/// The amplitudes always satisfy `|a|² + |b|² = 1` (within `NORM_TOLERANCE`).
/// The invariant is checked by every constructor and the state is never
/// mutated afterwards; each simulation run builds a fresh instance.
///
/// Analogy: a weighted coin whose bias comes from complex amplitudes. `|0⟩`
/// reads as Heads and `|1⟩` as Tails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)] // Avoid Eq for floating-point complex numbers
pub struct QuantumState {
    a: Complex<f64>,
    b: Complex<f64>,
}

impl QuantumState {
    /// Creates a state from amplitudes that are already normalized.
    ///
    /// # Returns
    /// * `Err(CoinError::InvalidAmplitude)` if any component is not finite.
    /// * `Err(CoinError::Normalization)` if `|a|² + |b|²` deviates from 1.
    pub fn new(a: Complex<f64>, b: Complex<f64>) -> Result<Self> {
        check_finite(a, b)?;
        let norm_sqr = a.norm_sqr() + b.norm_sqr();
        if (norm_sqr - 1.0).abs() > NORM_TOLERANCE {
            return Err(CoinError::Normalization {
                norm_sqr,
                tolerance: NORM_TOLERANCE,
            });
        }
        Ok(Self { a, b })
    }

    /// Creates a state by dividing both amplitudes by `sqrt(|a|² + |b|²)`.
    ///
    /// Fails with `CoinError::InvalidAmplitude` when the norm is zero,
    /// subnormal or not finite.
    pub fn from_unnormalized(a: Complex<f64>, b: Complex<f64>) -> Result<Self> {
        check_finite(a, b)?;
        let norm = (a.norm_sqr() + b.norm_sqr()).sqrt();
        if !norm.is_finite() || norm < f64::MIN_POSITIVE {
            return Err(CoinError::InvalidAmplitude {
                message: format!("cannot normalize amplitudes with norm {}", norm),
            });
        }
        Ok(Self { a: a / norm, b: b / norm })
    }

    /// The basis state `|0⟩`: always Heads.
    pub fn heads() -> Self {
        Self { a: Complex::one(), b: Complex::zero() }
    }

    /// The basis state `|1⟩`: always Tails.
    pub fn tails() -> Self {
        Self { a: Complex::zero(), b: Complex::one() }
    }

    /// The real equal superposition `(|0⟩ + |1⟩)/√2`: a fair coin.
    pub fn equal_superposition() -> Self {
        let amp = Complex::new(FRAC_1_SQRT_2, 0.0);
        Self { a: amp, b: amp }
    }

    /// Amplitude of `|0⟩` (Heads).
    pub fn a(&self) -> Complex<f64> {
        self.a
    }

    /// Amplitude of `|1⟩` (Tails).
    pub fn b(&self) -> Complex<f64> {
        self.b
    }

    /// Both amplitudes as `[a, b]`.
    pub fn amplitudes(&self) -> [Complex<f64>; 2] {
        [self.a, self.b]
    }

    /// `|a|² + |b|²`; equals 1 within tolerance.
    pub fn norm_sqr(&self) -> f64 {
        self.a.norm_sqr() + self.b.norm_sqr()
    }

    /// `P(Heads) = |a|²`, clamped to [0, 1] to absorb rounding.
    pub fn head_probability(&self) -> f64 {
        self.a.norm_sqr().clamp(0.0, 1.0)
    }

    /// `P(Tails) = 1 − P(Heads)`.
    pub fn tail_probability(&self) -> f64 {
        1.0 - self.head_probability()
    }

    /// Bloch-sphere coordinates of this state.
    pub fn orientation(&self) -> BlochVector {
        BlochVector::from_amplitudes(self.a, self.b)
    }

    /// Renders the amplitude pair as `a = <re±imi>, b = <re±imi>`.
    pub fn amplitude_text(&self, precision: usize) -> String {
        format!(
            "a = {}, b = {}",
            format_complex(self.a, precision),
            format_complex(self.b, precision)
        )
    }

    /// Renders the state expression as `|ψ⟩ = (<a>)|0⟩ + (<b>)|1⟩`.
    pub fn expression_text(&self, precision: usize) -> String {
        format!(
            "|ψ⟩ = ({})|0⟩ + ({})|1⟩",
            format_complex(self.a, precision),
            format_complex(self.b, precision)
        )
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{}", self.expression_text(precision))
    }
}

fn check_finite(a: Complex<f64>, b: Complex<f64>) -> Result<()> {
    if [a.re, a.im, b.re, b.im].iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(CoinError::InvalidAmplitude {
            message: format!("amplitudes must be finite, got a = {}, b = {}", a, b),
        })
    }
}

/// Rounds to `precision` decimals and folds `-0.0` into `0.0`, so that tiny
/// negative values never print as "-0.00".
fn tidy(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a complex number as `re+imi` / `re-imi` with fixed precision.
pub fn format_complex(c: Complex<f64>, precision: usize) -> String {
    let re = tidy(c.re, precision);
    let im = tidy(c.im, precision);
    let sign = if im < 0.0 { '-' } else { '+' };
    format!("{:.*}{}{:.*}i", precision, re, sign, precision, im.abs())
}

/// A definite outcome of measuring the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MeasurementOutcome {
    /// The `|0⟩` outcome, probability `|a|²`.
    Heads,
    /// The `|1⟩` outcome, probability `|b|²`.
    Tails,
}

impl MeasurementOutcome {
    /// Classifies one uniform draw in [0, 1): Heads iff `draw < head_prob`.
    pub fn from_draw(draw: f64, head_prob: f64) -> Self {
        if draw < head_prob {
            MeasurementOutcome::Heads
        } else {
            MeasurementOutcome::Tails
        }
    }

    /// Basis index of the outcome (0 for Heads, 1 for Tails).
    pub fn basis_index(&self) -> u8 {
        match self {
            MeasurementOutcome::Heads => 0,
            MeasurementOutcome::Tails => 1,
        }
    }
}

impl fmt::Display for MeasurementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementOutcome::Heads => f.pad("Heads"),
            MeasurementOutcome::Tails => f.pad("Tails"),
        }
    }
}
