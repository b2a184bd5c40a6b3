// src/simulation/measurement.rs
use rand::Rng;
use serde::Serialize;

use crate::core::MeasurementOutcome;

/// Head/tail tallies of a series of tosses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TossCounts {
    /// Number of Heads outcomes.
    pub heads: u64,
    /// Number of Tails outcomes.
    pub tails: u64,
}

impl TossCounts {
    /// Records one outcome.
    pub(crate) fn record(&mut self, outcome: MeasurementOutcome) {
        match outcome {
            MeasurementOutcome::Heads => self.heads += 1,
            MeasurementOutcome::Tails => self.tails += 1,
        }
    }

    /// Number of recorded tosses.
    pub fn total(&self) -> u64 {
        self.heads + self.tails
    }

    /// Count for a single outcome.
    pub fn count(&self, outcome: MeasurementOutcome) -> u64 {
        match outcome {
            MeasurementOutcome::Heads => self.heads,
            MeasurementOutcome::Tails => self.tails,
        }
    }

    /// Observed relative frequency of `outcome`; 0.0 when nothing was recorded.
    pub fn frequency(&self, outcome: MeasurementOutcome) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(outcome) as f64 / total as f64,
        }
    }
}

/// Samples one outcome with one fresh uniform draw.
pub fn measure<R: Rng + ?Sized>(head_prob: f64, rng: &mut R) -> MeasurementOutcome {
    MeasurementOutcome::from_draw(rng.random::<f64>(), head_prob)
}

/// Runs `tosses` independent measurements and tallies them.
/// The result always satisfies `heads + tails == tosses`.
pub fn tally<R: Rng + ?Sized>(head_prob: f64, tosses: u64, rng: &mut R) -> TossCounts {
    let mut counts = TossCounts::default();
    for _ in 0..tosses {
        counts.record(measure(head_prob, rng));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_certain_outcomes() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(tally(1.0, 200, &mut rng), TossCounts { heads: 200, tails: 0 });
        assert_eq!(tally(0.0, 200, &mut rng), TossCounts { heads: 0, tails: 200 });
    }

    #[test]
    fn test_counts_sum_to_tosses() {
        let mut rng = StdRng::seed_from_u64(9);
        for tosses in [1, 2, 17, 1000] {
            let counts = tally(0.3, tosses, &mut rng);
            assert_eq!(counts.total(), tosses);
        }
    }

    #[test]
    fn test_frequency() {
        let counts = TossCounts { heads: 3, tails: 1 };
        assert_eq!(counts.frequency(MeasurementOutcome::Heads), 0.75);
        assert_eq!(counts.count(MeasurementOutcome::Tails), 1);
        assert_eq!(TossCounts::default().frequency(MeasurementOutcome::Heads), 0.0);
    }
}
