// src/render/svg.rs
use plotters::prelude::*;
use std::f64::consts::TAU;
use std::fmt::Display;

use super::{DistributionRenderer, OrientationRenderer};
use crate::core::{BlochVector, CoinError, Result};
use crate::simulation::{ReferenceCurve, TossCounts};

/// Foreshortening of the x axis in the oblique sphere projection.
const DEPTH: f64 = 0.35;
/// Segments used to draw circles on the sphere.
const SEGMENTS: usize = 120;

fn render_err<E: Display>(e: E) -> CoinError {
    CoinError::render(e.to_string())
}

/// Oblique projection: x points toward the viewer, y to the right, z up.
fn project(x: f64, y: f64, z: f64) -> (f64, f64) {
    (y - DEPTH * x, z - DEPTH * x)
}

/// Renders both views as standalone SVG documents using `plotters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { width: 640, height: 480 }
    }
}

impl SvgRenderer {
    /// Creates a renderer producing `width`×`height` documents.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoinError::invalid_config("size", "width and height must be positive"));
        }
        Ok(Self { width, height })
    }
}

impl DistributionRenderer for SvgRenderer {
    type Output = String;

    fn render_distribution(&self, counts: &TossCounts, curve: &ReferenceCurve) -> Result<String> {
        let mut svg = String::new();
        {
            let n = counts.total().max(1) as f64;
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let mut chart = ChartBuilder::on(&root)
                .caption("Quantum coin toss", ("sans-serif", 20))
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(0.0..n, 0.0..(n * 1.1))
                .map_err(render_err)?;

            chart
                .configure_mesh()
                .x_desc("heads")
                .y_desc("count")
                .draw()
                .map_err(render_err)?;

            let bars = [
                ("Heads", counts.heads as f64, 0.1 * n, 0.4 * n, BLUE),
                ("Tails", counts.tails as f64, 0.6 * n, 0.9 * n, GREEN),
            ];
            for (label, height, x0, x1, color) in bars {
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(x0, 0.0), (x1, height)],
                        color.mix(0.55).filled(),
                    )))
                    .map_err(render_err)?
                    .label(format!("{} ({})", label, height))
                    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
            }

            chart
                .draw_series(LineSeries::new(curve.points().iter().copied(), &RED))
                .map_err(render_err)?
                .label("normal approximation")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(curve.mean(), 0.0), (curve.mean(), n * 1.05)],
                    BLACK.mix(0.6),
                )))
                .map_err(render_err)?;

            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(render_err)?;

            root.present().map_err(render_err)?;
        }
        Ok(svg)
    }
}

impl OrientationRenderer for SvgRenderer {
    type Output = String;

    fn render_orientation(&self, vector: &BlochVector) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;

            let extent = 1.5;
            let mut chart = ChartBuilder::on(&root)
                .caption("Bloch sphere", ("sans-serif", 20))
                .margin(10)
                .build_cartesian_2d(-extent..extent, -extent..extent)
                .map_err(render_err)?;

            let angles = (0..=SEGMENTS).map(|i| i as f64 * TAU / SEGMENTS as f64);
            // Outline (the y-z great circle) and the equator.
            chart
                .draw_series(LineSeries::new(
                    angles.clone().map(|t| project(0.0, t.cos(), t.sin())),
                    BLACK.mix(0.5),
                ))
                .map_err(render_err)?;
            chart
                .draw_series(LineSeries::new(
                    angles.map(|t| project(t.cos(), t.sin(), 0.0)),
                    BLACK.mix(0.3),
                ))
                .map_err(render_err)?;

            let axes = [
                ((1.2, 0.0, 0.0), "x"),
                ((0.0, 1.2, 0.0), "y"),
                ((0.0, 0.0, 1.2), "|0⟩"),
                ((0.0, 0.0, -1.2), "|1⟩"),
            ];
            for ((x, y, z), label) in axes {
                let tip = project(x, y, z);
                chart
                    .draw_series(std::iter::once(PathElement::new(vec![(0.0, 0.0), tip], BLACK.mix(0.4))))
                    .map_err(render_err)?;
                chart
                    .draw_series(std::iter::once(Text::new(label, tip, ("sans-serif", 15).into_font())))
                    .map_err(render_err)?;
            }

            let tip = project(vector.x, vector.y, vector.z);
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(0.0, 0.0), tip],
                    RED.stroke_width(3),
                )))
                .map_err(render_err)?;
            chart
                .draw_series(std::iter::once(Circle::new(tip, 5, RED.filled())))
                .map_err(render_err)?;

            root.present().map_err(render_err)?;
        }
        Ok(svg)
    }
}
