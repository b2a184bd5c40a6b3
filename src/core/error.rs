//! Error handling logic

use thiserror::Error;

/// Result type alias for coin toss operations.
pub type Result<T> = std::result::Result<T, CoinError>;

/// Error types for state generation, measurement simulation and rendering.
/// Every failure is local to the call that produced it; nothing is
/// partially committed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoinError {
    /// The toss count was zero. A simulation needs at least one trial.
    #[error("Invalid toss count: {tosses} (at least one toss is required)")]
    InvalidTossCount {
        /// Rejected toss count
        tosses: u64,
    },

    /// The amplitudes do not satisfy |a|² + |b|² = 1.
    #[error("State normalization failed: |a|^2 + |b|^2 = {norm_sqr} (deviation > {tolerance})")]
    Normalization {
        /// Observed sum of squared magnitudes
        norm_sqr: f64,
        /// Allowed deviation from 1.0
        tolerance: f64,
    },

    /// Amplitudes that cannot describe a state at all (non-finite or zero norm).
    #[error("Invalid amplitude: {message}")]
    InvalidAmplitude {
        /// InvalidAmplitude failure message
        message: String,
    },

    /// Every random draw during state generation had a vanishing norm.
    #[error("State generation produced a zero-norm draw {attempts} times in a row")]
    DegenerateState {
        /// Number of draws attempted
        attempts: u32,
    },

    /// Probabilities outside [0, 1] or not summing to one.
    #[error("Invalid probability: {message}")]
    InvalidProbability {
        /// InvalidProbability failure message
        message: String,
    },

    /// Orientation vector that is not of unit length.
    #[error("Orientation vector is not unit length (norm = {norm})")]
    InvalidOrientation {
        /// Observed Euclidean norm
        norm: f64,
    },

    /// A configuration value was rejected.
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfig {
        /// Configuration field name
        name: String,
        /// Reason the value is invalid
        reason: String,
    },

    /// A renderer failed to produce its output.
    #[error("Render failed: {0}")]
    Render(String),
}

impl CoinError {
    /// Create an invalid configuration error.
    pub fn invalid_config(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a render error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoinError::InvalidTossCount { tosses: 0 };
        assert!(err.to_string().contains("at least one toss"));

        let err = CoinError::invalid_config("curve_points", "must be at least 2");
        assert!(err.to_string().contains("curve_points"));
        assert!(err.to_string().contains("at least 2"));

        let err = CoinError::DegenerateState { attempts: 16 };
        assert!(err.to_string().contains("16"));
    }

    #[test]
    fn test_error_clone() {
        let err = CoinError::render("backend closed");
        assert_eq!(err.clone(), err);
    }
}
