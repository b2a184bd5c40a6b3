// src/generation/mod.rs

//! Random generation of normalized single-qubit states.
//!
//! Each amplitude gets a real and an imaginary part drawn uniformly from
//! [0, 1), four draws in total. The pair is then divided by
//! `sqrt(|a|² + |b|²)`. The random source is always supplied by the caller
//! so seeded runs reproduce exactly.

use num_complex::Complex;
use rand::Rng;
use tracing::{debug, warn};

use crate::core::{CoinError, MAX_GENERATION_ATTEMPTS, QuantumState, Result};

/// Draws a fresh normalized state from `rng`.
///
/// A zero-norm draw has probability zero but is still guarded: it is retried
/// up to `MAX_GENERATION_ATTEMPTS` times before `CoinError::DegenerateState`.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let state = qtoss::generate_state(&mut rng).unwrap();
/// assert!((state.norm_sqr() - 1.0).abs() < 1e-9);
/// ```
pub fn generate_state<R: Rng + ?Sized>(rng: &mut R) -> Result<QuantumState> {
    generate_state_with_attempts(rng, MAX_GENERATION_ATTEMPTS)
}

/// Same as [`generate_state`] with an explicit retry bound.
///
/// # Returns
/// * `Err(CoinError::DegenerateState)` if every one of `max_attempts` draws had zero norm
///   (also returned immediately for `max_attempts == 0`).
pub fn generate_state_with_attempts<R: Rng + ?Sized>(
    rng: &mut R,
    max_attempts: u32,
) -> Result<QuantumState> {
    for attempt in 1..=max_attempts {
        let a = Complex::new(rng.random::<f64>(), rng.random::<f64>());
        let b = Complex::new(rng.random::<f64>(), rng.random::<f64>());

        match QuantumState::from_unnormalized(a, b) {
            Ok(state) => {
                debug!(attempt, a = %state.a(), b = %state.b(), "generated quantum state");
                return Ok(state);
            }
            Err(CoinError::InvalidAmplitude { message }) => {
                warn!(attempt, max_attempts, %message, "degenerate amplitude draw, retrying");
            }
            Err(e) => return Err(e),
        }
    }
    Err(CoinError::DegenerateState { attempts: max_attempts })
}
