// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod orientation;
pub mod state;

// Re-export public types for convenient access via `qtoss::core::TypeName`
pub use error::{CoinError, Result};
pub use orientation::BlochVector;
pub use state::{MeasurementOutcome, QuantumState, format_complex};

pub mod constants;
pub use constants::{
    DEFAULT_CURVE_POINTS, MAX_GENERATION_ATTEMPTS, NORM_TOLERANCE, TOSS_SLIDER_MAX,
    TOSS_SLIDER_MIN, clamp_to_slider,
};
