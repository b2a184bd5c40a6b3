// src/simulation/results.rs
use serde::Serialize;
use std::fmt;

use crate::core::{BlochVector, MeasurementOutcome, QuantumState};
use super::curve::ReferenceCurve;
use super::measurement::TossCounts;

/// Decimal places used for the amplitude pair text.
pub(crate) const AMPLITUDE_PRECISION: usize = 3;
/// Decimal places used for the state expression text.
pub(crate) const EXPRESSION_PRECISION: usize = 2;

/// Holds the results of one measurement simulation.
///
/// Built once per `simulate` call and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    state: QuantumState,
    tosses: u64,
    counts: TossCounts,
    head_probability: f64,
    tail_probability: f64,
    curve: ReferenceCurve,
    orientation: BlochVector,
    amplitude_text: String,
    state_text: String,
    probability_text: String,
}

impl SimulationResult {
    /// Assembles a result and renders its text summaries. (Internal visibility)
    pub(crate) fn new(
        state: QuantumState,
        tosses: u64,
        counts: TossCounts,
        curve: ReferenceCurve,
    ) -> Self {
        let head_probability = state.head_probability();
        let tail_probability = state.tail_probability();
        Self {
            state,
            tosses,
            counts,
            head_probability,
            tail_probability,
            curve,
            orientation: state.orientation(),
            amplitude_text: state.amplitude_text(AMPLITUDE_PRECISION),
            state_text: state.expression_text(EXPRESSION_PRECISION),
            probability_text: probability_text(head_probability, tail_probability),
        }
    }

    /// The state that was measured.
    pub fn state(&self) -> &QuantumState {
        &self.state
    }

    /// Number of tosses simulated.
    pub fn tosses(&self) -> u64 {
        self.tosses
    }

    /// Head/tail tallies.
    pub fn counts(&self) -> TossCounts {
        self.counts
    }

    /// Number of Heads outcomes.
    pub fn head_count(&self) -> u64 {
        self.counts.heads
    }

    /// Number of Tails outcomes.
    pub fn tail_count(&self) -> u64 {
        self.counts.tails
    }

    /// Theoretical `P(Heads) = |a|²`.
    pub fn head_probability(&self) -> f64 {
        self.head_probability
    }

    /// Theoretical `P(Tails) = 1 − P(Heads)`.
    pub fn tail_probability(&self) -> f64 {
        self.tail_probability
    }

    /// Theoretical probability of a given outcome.
    pub fn probability(&self, outcome: MeasurementOutcome) -> f64 {
        match outcome {
            MeasurementOutcome::Heads => self.head_probability,
            MeasurementOutcome::Tails => self.tail_probability,
        }
    }

    /// Gaussian overlay for the count chart.
    pub fn curve(&self) -> &ReferenceCurve {
        &self.curve
    }

    /// Bloch-sphere coordinates of the state.
    pub fn orientation(&self) -> BlochVector {
        self.orientation
    }

    /// `a = ..., b = ...` at three decimals.
    pub fn amplitude_text(&self) -> &str {
        &self.amplitude_text
    }

    /// `|ψ⟩ = (...)|0⟩ + (...)|1⟩` at two decimals.
    pub fn state_text(&self) -> &str {
        &self.state_text
    }

    /// `Heads: xx.xx% | Tails: yy.yy%`.
    pub fn probability_text(&self) -> &str {
        &self.probability_text
    }
}

fn probability_text(head_prob: f64, tail_prob: f64) -> String {
    format!("Heads: {:.2}% | Tails: {:.2}%", head_prob * 100.0, tail_prob * 100.0)
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        writeln!(f, "  Tosses: {}", self.tosses)?;
        writeln!(f, "  Amplitudes: {}", self.amplitude_text)?;
        writeln!(f, "  State: {}", self.state_text)?;
        writeln!(f, "  Probabilities: {}", self.probability_text)?;
        writeln!(f, "  Outcomes:")?;
        for outcome in [MeasurementOutcome::Heads, MeasurementOutcome::Tails] {
            writeln!(
                f,
                "    {}: {} ({:.2}%)",
                outcome,
                self.counts.count(outcome),
                self.counts.frequency(outcome) * 100.0
            )?;
        }
        writeln!(
            f,
            "  Reference: mean {:.2}, std dev {:.2}",
            self.curve.mean(),
            self.curve.std_dev()
        )?;
        writeln!(f, "  Bloch vector: {}", self.orientation)
    }
}
