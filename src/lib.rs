// src/lib.rs

//! `qtoss` - A quantum coin toss
//!
//! This library models a single qubit in superposition as a weighted coin,
//! simulates repeated measurement of it, and derives what a front end needs to
//! show the outcome: head/tail counts, a normal-approximation reference curve,
//! the Bloch-sphere orientation and short text summaries.

pub mod core;
pub mod generation;
pub mod simulation;
pub mod validation;
pub mod render;

// Re-export the most common types for easier top-level use
pub use crate::core::{BlochVector, CoinError, MeasurementOutcome, QuantumState, Result};
pub use generation::{generate_state, generate_state_with_attempts};
pub use simulation::{ReferenceCurve, SimulationResult, Simulator, SimulatorConfig, TossCounts, simulate};
pub use render::{DistributionRenderer, OrientationRenderer, TextRenderer, render_result};
pub use validation::{
    check_normalization,
    check_orientation,
    check_probabilities,
    check_toss_count,
    validate_result,
};

// Example 1: Generate a random state and toss it
// One full run: a fresh random state, then repeated measurement of it.
/// ```
/// use qtoss::{Simulator, SimulatorConfig, CoinError};
///
/// let config = SimulatorConfig { seed: Some(42), ..Default::default() };
/// let simulator = Simulator::with_config(config)?;
/// let result = simulator.run(500)?;
///
/// println!("{}", result);
/// assert_eq!(result.head_count() + result.tail_count(), 500);
/// assert!((result.head_probability() + result.tail_probability() - 1.0).abs() < 1e-9);
/// assert!((result.orientation().norm() - 1.0).abs() < 1e-9);
///
/// // Same seed, same run.
/// assert_eq!(simulator.run(500)?, result);
/// # Ok::<(), CoinError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Equal superposition rendered as text
// A fair coin points along +x on the Bloch sphere.
/// ```
/// use qtoss::{QuantumState, TextRenderer, render_result, simulate};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let result = simulate(&QuantumState::equal_superposition(), 1000, &mut rng).unwrap();
/// assert_eq!(result.probability_text(), "Heads: 50.00% | Tails: 50.00%");
///
/// let (chart, sphere) = render_result(&TextRenderer::default(), &result).unwrap();
/// println!("{}\n{}", chart, sphere);
/// assert!(sphere.starts_with("Bloch vector (1.000, 0.000, 0.000)"));
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
