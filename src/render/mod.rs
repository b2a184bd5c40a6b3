// src/render/mod.rs

//! Presentation interface for simulation results.
//!
//! The simulation core never depends on a graphics library. Front ends
//! implement [`DistributionRenderer`] and [`OrientationRenderer`] for
//! whatever output they need. [`TextRenderer`] is always available; the
//! SVG renderer lives behind the `plot` feature.

#[cfg(feature = "plot")]
mod svg;
#[cfg(feature = "plot")]
pub use svg::SvgRenderer;

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::core::{BlochVector, CoinError, MeasurementOutcome, Result};
use crate::simulation::{ReferenceCurve, SimulationResult, TossCounts};

/// Renders the head/tail counts with the theoretical curve overlaid.
pub trait DistributionRenderer {
    /// Rendered artifact (text, SVG document, widget handle, ...).
    type Output;

    /// Draws `counts` as bars and `curve` as an overlay on the same count axis.
    fn render_distribution(&self, counts: &TossCounts, curve: &ReferenceCurve) -> Result<Self::Output>;
}

/// Renders the Bloch-sphere orientation of a state.
pub trait OrientationRenderer {
    /// Rendered artifact.
    type Output;

    /// Draws `vector` on the unit sphere.
    fn render_orientation(&self, vector: &BlochVector) -> Result<Self::Output>;
}

/// Renders both views of a finished simulation.
pub fn render_result<R>(
    renderer: &R,
    result: &SimulationResult,
) -> Result<(<R as DistributionRenderer>::Output, <R as OrientationRenderer>::Output)>
where
    R: DistributionRenderer + OrientationRenderer,
{
    let chart = renderer.render_distribution(&result.counts(), result.curve())?;
    let sphere = renderer.render_orientation(&result.orientation())?;
    Ok((chart, sphere))
}

/// Plain-text renderer: a horizontal bar chart and a vector summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { width: 40 }
    }
}

impl TextRenderer {
    /// Creates a renderer whose longest bar is `width` characters.
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(CoinError::invalid_config("width", "must be at least 1"));
        }
        Ok(Self { width })
    }

    fn bar(&self, value: f64, scale: f64, fill: char) -> String {
        let len = if scale > 0.0 {
            ((value / scale) * self.width as f64).round() as usize
        } else {
            0
        };
        std::iter::repeat_n(fill, len.min(self.width)).collect()
    }
}

impl DistributionRenderer for TextRenderer {
    type Output = String;

    fn render_distribution(&self, counts: &TossCounts, curve: &ReferenceCurve) -> Result<String> {
        let scale = counts.total() as f64;
        let mut out = String::new();
        for outcome in [MeasurementOutcome::Heads, MeasurementOutcome::Tails] {
            let count = counts.count(outcome);
            writeln!(out, "{:<5} |{:<w$}| {}", outcome, self.bar(count as f64, scale, '#'), count, w = self.width)
                .map_err(|e| CoinError::render(e.to_string()))?;
        }
        // Expected head count as a marker on the same scale as the bars.
        writeln!(
            out,
            "{:<5} |{:<w$}| mean {:.2}, std dev {:.2}, peak {:.0}",
            "Ref",
            format!("{}^", self.bar(curve.mean(), scale, ' ')),
            curve.mean(),
            curve.std_dev(),
            curve.peak(),
            w = self.width + 1
        )
        .map_err(|e| CoinError::render(e.to_string()))?;
        Ok(out)
    }
}

impl OrientationRenderer for TextRenderer {
    type Output = String;

    fn render_orientation(&self, vector: &BlochVector) -> Result<String> {
        Ok(format!(
            "Bloch vector {} | θ = {:.1}°, φ = {:.1}°",
            vector,
            vector.polar_angle() * 180.0 / PI,
            vector.azimuthal_angle() * 180.0 / PI
        ))
    }
}
