// src/simulation/curve.rs
use serde::Serialize;
use tracing::trace;

use crate::core::{CoinError, Result, constants::MIN_STD_DEV};

/// Theoretical overlay for the head-count bar chart.
///
/// The binomial head count is approximated by a normal distribution with
/// mean `N·p` and standard deviation `sqrt(N·p·(1−p))`, sampled on an evenly
/// spaced grid over [0, N]. The density is scaled so its peak equals `N`,
/// which puts it on the same axis as the raw counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceCurve {
    mean: f64,
    std_dev: f64,
    points: Vec<(f64, f64)>,
}

impl ReferenceCurve {
    /// Samples the scaled Gaussian for `tosses` trials with `P(Heads) = head_prob`.
    ///
    /// When the standard deviation vanishes (`head_prob` is 0 or 1) the curve
    /// collapses to a single spike of height `tosses` at the grid point nearest
    /// the mean, so no NaN is ever produced.
    ///
    /// # Returns
    /// * `Err(CoinError::InvalidTossCount)` for zero tosses.
    /// * `Err(CoinError::InvalidConfig)` if fewer than two grid points are requested.
    /// * `Err(CoinError::InvalidProbability)` if `head_prob` is outside [0, 1].
    pub fn binomial_approximation(tosses: u64, head_prob: f64, resolution: usize) -> Result<Self> {
        if tosses == 0 {
            return Err(CoinError::InvalidTossCount { tosses });
        }
        if resolution < 2 {
            return Err(CoinError::invalid_config("curve_points", "must be at least 2"));
        }
        if !(0.0..=1.0).contains(&head_prob) {
            return Err(CoinError::InvalidProbability {
                message: format!("head probability {} outside [0, 1]", head_prob),
            });
        }

        let n = tosses as f64;
        let tail_prob = 1.0 - head_prob;
        let mean = n * head_prob;
        let std_dev = (n * head_prob * tail_prob).sqrt();
        let step = n / (resolution - 1) as f64;

        let xs = (0..resolution).map(|i| i as f64 * step);
        let points: Vec<(f64, f64)> = if std_dev <= MIN_STD_DEV {
            let spike = ((mean / step).round() as usize).min(resolution - 1);
            xs.enumerate()
                .map(|(i, x)| (x, if i == spike { n } else { 0.0 }))
                .collect()
        } else {
            let two_var = 2.0 * std_dev * std_dev;
            xs.map(|x| (x, n * (-(x - mean).powi(2) / two_var).exp()))
                .collect()
        };

        trace!(tosses, mean, std_dev, resolution, "sampled reference curve");
        Ok(Self { mean, std_dev, points })
    }

    /// Mean of the approximation, `N·p`.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the approximation, `sqrt(N·p·(1−p))`.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Sampled `(x, y)` pairs, `x` ascending from 0 to N.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Largest sampled `y` value.
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|&(_, y)| y).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spans_zero_to_tosses() -> Result<()> {
        let curve = ReferenceCurve::binomial_approximation(100, 0.5, 101)?;
        let points = curve.points();
        assert_eq!(points.len(), 101);
        assert_eq!(points[0].0, 0.0);
        assert!((points[100].0 - 100.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_peak_equals_tosses_at_mean() -> Result<()> {
        // Grid step of 1.0 puts a sample exactly on the mean (50).
        let curve = ReferenceCurve::binomial_approximation(100, 0.5, 101)?;
        assert_eq!(curve.mean(), 50.0);
        assert_eq!(curve.std_dev(), 5.0);
        assert!((curve.peak() - 100.0).abs() < 1e-9);
        assert!((curve.points()[50].1 - 100.0).abs() < 1e-9);
        // One standard deviation away: N * exp(-1/2)
        assert!((curve.points()[55].1 - 100.0 * (-0.5f64).exp()).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_degenerate_std_dev_is_a_spike() -> Result<()> {
        let heads = ReferenceCurve::binomial_approximation(40, 1.0, 9)?;
        assert_eq!(heads.std_dev(), 0.0);
        assert_eq!(heads.points()[8].1, 40.0);
        assert!(heads.points()[..8].iter().all(|&(_, y)| y == 0.0));

        let tails = ReferenceCurve::binomial_approximation(1, 0.0, 1000)?;
        assert_eq!(tails.points()[0].1, 1.0);
        assert!(tails.points().iter().all(|&(x, y)| x.is_finite() && y.is_finite()));
        Ok(())
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(
            ReferenceCurve::binomial_approximation(0, 0.5, 10).unwrap_err(),
            CoinError::InvalidTossCount { tosses: 0 }
        );
        assert!(matches!(
            ReferenceCurve::binomial_approximation(10, 0.5, 1).unwrap_err(),
            CoinError::InvalidConfig { .. }
        ));
        assert!(matches!(
            ReferenceCurve::binomial_approximation(10, 1.5, 10).unwrap_err(),
            CoinError::InvalidProbability { .. }
        ));
    }
}
