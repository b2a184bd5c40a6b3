//! Tolerances and bounds shared by generation, simulation and validation.

/// Allowed deviation of |a|² + |b|² from 1.0.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Allowed deviation of the orientation vector's norm from 1.0.
pub const ORIENTATION_TOLERANCE: f64 = 1e-6;

/// Standard deviations at or below this are treated as zero when sampling
/// the reference curve.
pub const MIN_STD_DEV: f64 = 1e-12;

/// Number of draws `generate_state` makes before giving up on a zero-norm sample.
pub const MAX_GENERATION_ATTEMPTS: u32 = 16;

/// Number of points sampled over [0, tosses] for the reference curve.
pub const DEFAULT_CURVE_POINTS: usize = 1000;

/// Lower bound of the interactive toss-count slider.
pub const TOSS_SLIDER_MIN: u64 = 10;

/// Upper bound of the interactive toss-count slider.
pub const TOSS_SLIDER_MAX: u64 = 1000;

/// Clamps a toss count into the slider range. The simulation core itself
/// accepts any positive count; this is for front ends that expose the slider.
pub fn clamp_to_slider(tosses: u64) -> u64 {
    tosses.clamp(TOSS_SLIDER_MIN, TOSS_SLIDER_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_slider() {
        assert_eq!(clamp_to_slider(0), TOSS_SLIDER_MIN);
        assert_eq!(clamp_to_slider(500), 500);
        assert_eq!(clamp_to_slider(5000), TOSS_SLIDER_MAX);
    }
}
