// src/simulation/mod.rs

//! Simulates repeated measurement of a single-qubit state.
//! This module contains the `Simulator` entry point, its configuration, and
//! the pieces a run is built from: sampling (`measurement`), the theoretical
//! overlay (`curve`) and the aggregated `SimulationResult`.

mod curve;
mod measurement;
mod results;

// Re-export the main public interface types
pub use curve::ReferenceCurve;
pub use measurement::{TossCounts, measure, tally};
pub use results::SimulationResult;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants::{DEFAULT_CURVE_POINTS, MAX_GENERATION_ATTEMPTS, NORM_TOLERANCE};
use crate::core::{CoinError, QuantumState, Result};
use crate::generation::generate_state_with_attempts;
use crate::validation::{check_normalization, check_toss_count, validate_result};

/// Configuration for the [`Simulator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Number of grid points sampled for the reference curve.
    pub curve_points: usize,
    /// Seed for reproducible runs; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Retry bound for zero-norm draws during state generation.
    pub max_generation_attempts: u32,
    /// Allowed deviation of `|a|² + |b|²` from 1 for states passed to `simulate`.
    pub norm_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            curve_points: DEFAULT_CURVE_POINTS,
            seed: None,
            max_generation_attempts: MAX_GENERATION_ATTEMPTS,
            norm_tolerance: NORM_TOLERANCE,
        }
    }
}

impl SimulatorConfig {
    /// Rejects values the simulator cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.curve_points < 2 {
            return Err(CoinError::invalid_config("curve_points", "must be at least 2"));
        }
        if self.max_generation_attempts == 0 {
            return Err(CoinError::invalid_config("max_generation_attempts", "must be at least 1"));
        }
        if !self.norm_tolerance.is_finite() || self.norm_tolerance <= 0.0 {
            return Err(CoinError::invalid_config("norm_tolerance", "must be finite and positive"));
        }
        Ok(())
    }
}

/// The main simulator: generates a state, measures it repeatedly and
/// derives the statistics a front end needs.
#[derive(Debug, Clone, Default)] // Allows Simulator::default() -> Simulator::new()
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Simulator with the given configuration, validating it first.
    pub fn with_config(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Measures `state` `tosses` times using draws from `rng`.
    ///
    /// # Arguments
    /// * `state` - The state to measure. It is re-checked against `norm_tolerance`.
    /// * `tosses` - Number of independent trials; must be at least 1.
    /// * `rng` - Source of the uniform draws, one per trial.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with counts, probabilities, curve, orientation and texts.
    /// * `Err(CoinError::InvalidTossCount)` for zero tosses.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        state: &QuantumState,
        tosses: u64,
        rng: &mut R,
    ) -> Result<SimulationResult> {
        check_toss_count(tosses)?;
        check_normalization(state, Some(self.config.norm_tolerance))?;

        let head_prob = state.head_probability();
        let counts = tally(head_prob, tosses, rng);
        let curve = ReferenceCurve::binomial_approximation(tosses, head_prob, self.config.curve_points)?;
        let result = SimulationResult::new(*state, tosses, counts, curve);
        validate_result(&result, Some(self.config.norm_tolerance))?;

        debug!(
            tosses,
            heads = counts.heads,
            tails = counts.tails,
            head_prob,
            orientation = %result.orientation(),
            "simulation finished"
        );
        Ok(result)
    }

    /// Runs the full pipeline once: generate a fresh state, then simulate it.
    ///
    /// A seeded configuration builds a new RNG from the seed on every call,
    /// so repeated calls return identical results; otherwise the thread RNG is used.
    pub fn run(&self, tosses: u64) -> Result<SimulationResult> {
        match self.config.seed {
            Some(seed) => self.run_with_rng(tosses, &mut StdRng::seed_from_u64(seed)),
            None => self.run_with_rng(tosses, &mut rand::rng()),
        }
    }

    /// Runs the full pipeline with a caller-supplied random source.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, tosses: u64, rng: &mut R) -> Result<SimulationResult> {
        // Reject before consuming any randomness.
        check_toss_count(tosses)?;
        let state = generate_state_with_attempts(rng, self.config.max_generation_attempts)?;
        self.simulate(&state, tosses, rng)
    }
}

/// Measures `state` `tosses` times with the default configuration.
///
/// ```
/// use qtoss::{QuantumState, simulate};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let result = simulate(&QuantumState::heads(), 100, &mut rng).unwrap();
/// assert_eq!(result.head_count(), 100);
/// assert_eq!(result.probability_text(), "Heads: 100.00% | Tails: 0.00%");
/// ```
pub fn simulate<R: Rng + ?Sized>(state: &QuantumState, tosses: u64, rng: &mut R) -> Result<SimulationResult> {
    Simulator::new().simulate(state, tosses, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_config_validation() {
        assert!(SimulatorConfig::default().validate().is_ok());

        let config = SimulatorConfig { curve_points: 1, ..Default::default() };
        assert!(matches!(Simulator::with_config(config), Err(CoinError::InvalidConfig { .. })));

        let config = SimulatorConfig { max_generation_attempts: 0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = SimulatorConfig { norm_tolerance: f64::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tosses_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = simulate(&QuantumState::heads(), 0, &mut rng).unwrap_err();
        assert_eq!(err, CoinError::InvalidTossCount { tosses: 0 });

        let err = Simulator::new().run(0).unwrap_err();
        assert_eq!(err, CoinError::InvalidTossCount { tosses: 0 });
    }

    #[test]
    fn test_seeded_run_is_repeatable() -> Result<()> {
        let config = SimulatorConfig { seed: Some(2024), ..Default::default() };
        let simulator = Simulator::with_config(config)?;
        assert_eq!(simulator.run(250)?, simulator.run(250)?);
        Ok(())
    }

    #[test]
    fn test_curve_resolution_follows_config() -> Result<()> {
        let config = SimulatorConfig { curve_points: 11, ..Default::default() };
        let simulator = Simulator::with_config(config)?;
        let mut rng = StdRng::seed_from_u64(8);
        let result = simulator.simulate(&QuantumState::equal_superposition(), 10, &mut rng)?;
        assert_eq!(result.curve().points().len(), 11);
        Ok(())
    }

    #[test]
    fn test_complex_state_orientation() -> Result<()> {
        // (1/2)|0> + (i·√3/2)|1>: x = 0, y = √3/2, z = -1/2
        let state = QuantumState::new(Complex::new(0.5, 0.0), Complex::new(0.0, 3f64.sqrt() / 2.0))?;
        let mut rng = StdRng::seed_from_u64(4);
        let result = simulate(&state, 20, &mut rng)?;
        let v = result.orientation();
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 3f64.sqrt() / 2.0).abs() < 1e-12);
        assert!((v.z + 0.5).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: SimulatorConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.curve_points, DEFAULT_CURVE_POINTS);
    }
}
