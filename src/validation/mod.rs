// src/validation/mod.rs

//! Provides functions to validate states, inputs and simulation results.

use crate::core::constants::{NORM_TOLERANCE, ORIENTATION_TOLERANCE};
use crate::core::{BlochVector, CoinError, QuantumState, Result};
use crate::simulation::SimulationResult;

// Default tolerance for probability sums (can be overridden by caller)
const DEFAULT_PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Checks if the state is normalized (`|a|² + |b|² ≈ 1.0`).
///
/// # Arguments
/// * `state` - The `QuantumState` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to `NORM_TOLERANCE`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(CoinError::Normalization)` if normalization fails.
pub fn check_normalization(state: &QuantumState, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(CoinError::Normalization { norm_sqr, tolerance: effective_tolerance })
    } else {
        Ok(())
    }
}

/// Rejects a toss count of zero before any sampling happens.
pub fn check_toss_count(tosses: u64) -> Result<()> {
    if tosses == 0 {
        Err(CoinError::InvalidTossCount { tosses })
    } else {
        Ok(())
    }
}

/// Checks that both probabilities lie in [0, 1] and sum to one.
pub fn check_probabilities(head_prob: f64, tail_prob: f64, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_PROBABILITY_TOLERANCE);
    for (name, p) in [("head", head_prob), ("tail", tail_prob)] {
        if !(0.0..=1.0).contains(&p) {
            return Err(CoinError::InvalidProbability {
                message: format!("{} probability {} outside [0, 1]", name, p),
            });
        }
    }
    let sum = head_prob + tail_prob;
    if (sum - 1.0).abs() > effective_tolerance {
        return Err(CoinError::InvalidProbability {
            message: format!("probabilities sum to {} (deviation > {})", sum, effective_tolerance),
        });
    }
    Ok(())
}

/// Checks that the orientation vector sits on the unit sphere.
pub fn check_orientation(vector: &BlochVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(ORIENTATION_TOLERANCE);
    let norm = vector.norm();
    if (norm - 1.0).abs() > effective_tolerance || vector.components().iter().any(|c| c.abs() > 1.0 + effective_tolerance) {
        Err(CoinError::InvalidOrientation { norm })
    } else {
        Ok(())
    }
}

/// Performs all consistency checks on a finished simulation:
/// normalization, counts summing to the toss count, probability bounds,
/// and a unit-length orientation vector.
///
/// `norm_tolerance` defaults to `NORM_TOLERANCE`.
pub fn validate_result(result: &SimulationResult, norm_tolerance: Option<f64>) -> Result<()> {
    check_normalization(result.state(), norm_tolerance)?;
    check_toss_count(result.tosses())?;
    let total = result.counts().total();
    if total != result.tosses() {
        return Err(CoinError::InvalidProbability {
            message: format!("counts sum to {} but {} tosses were simulated", total, result.tosses()),
        });
    }
    check_probabilities(result.head_probability(), result.tail_probability(), None)?;
    check_orientation(&result.orientation(), None)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_toss_count() {
        assert!(check_toss_count(1).is_ok());
        assert_eq!(check_toss_count(0), Err(CoinError::InvalidTossCount { tosses: 0 }));
    }

    #[test]
    fn test_check_probabilities() {
        assert!(check_probabilities(0.25, 0.75, None).is_ok());
        assert!(check_probabilities(0.5, 0.6, None).is_err());
        assert!(check_probabilities(-0.1, 1.1, None).is_err());
        assert!(check_probabilities(f64::NAN, 0.5, None).is_err());
    }

    #[test]
    fn test_check_orientation() {
        assert!(check_orientation(&BlochVector::new(0.0, 0.0, 1.0), None).is_ok());
        assert!(check_orientation(&BlochVector::new(0.6, 0.8, 0.0), None).is_ok());
        assert!(matches!(
            check_orientation(&BlochVector::new(0.5, 0.0, 0.0), None),
            Err(CoinError::InvalidOrientation { .. })
        ));
    }

    #[test]
    fn test_check_normalization() {
        assert!(check_normalization(&QuantumState::equal_superposition(), None).is_ok());
        assert!(check_normalization(&QuantumState::heads(), Some(0.0)).is_ok());
    }
}
