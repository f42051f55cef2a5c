use rand::Rng;

use crate::config::{CurveConfig, CurveStyle};
use crate::curve::samples::generate_samples;
use crate::curve::scatter::random_segments;
use crate::curve::spline::{Curve, polyline_path};
use crate::foundation::core::{BezPath, Canvas, Line, Point};
use crate::foundation::error::{StonkError, StonkResult};
use crate::render::path::{curve_path_data, lines_path_data, polyline_path_data};

/// Generated geometry for one decoration variant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum Shape {
    /// Independent straight segments.
    Scatter {
        /// Segments in drawing order.
        lines: Vec<Line>,
    },
    /// Random walk joined by straight segments.
    Polyline {
        /// Walk samples.
        points: Vec<Point>,
    },
    /// Random walk smoothed into a Bezier spline.
    Smooth {
        /// Walk samples the curve interpolates.
        samples: Vec<Point>,
        /// Smoothed curve.
        curve: Curve,
    },
}

/// One complete draw: the shape plus the canvas it was generated for.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Drawing {
    /// Canvas the geometry is bounded by.
    pub canvas: Canvas,
    /// Generated geometry.
    pub shape: Shape,
}

impl Drawing {
    /// Style that produced this drawing.
    pub fn style(&self) -> CurveStyle {
        match self.shape {
            Shape::Scatter { .. } => CurveStyle::Scatter,
            Shape::Polyline { .. } => CurveStyle::Polyline,
            Shape::Smooth { .. } => CurveStyle::Smooth,
        }
    }

    /// The whole drawing as a single SVG path `d` attribute.
    pub fn path_data(&self) -> String {
        match &self.shape {
            Shape::Scatter { lines } => lines_path_data(lines),
            Shape::Polyline { points } => polyline_path_data(points),
            Shape::Smooth { curve, .. } => curve_path_data(curve),
        }
    }

    /// The whole drawing as a `kurbo` path.
    pub fn to_bez_path(&self) -> BezPath {
        match &self.shape {
            Shape::Scatter { lines } => {
                let mut path = BezPath::new();
                for l in lines {
                    path.move_to(l.p0);
                    path.line_to(l.p1);
                }
                path
            }
            Shape::Polyline { points } => polyline_path(points),
            Shape::Smooth { curve, .. } => curve.to_bez_path(),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> StonkResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StonkError::serde(e.to_string()))
    }
}

/// Validate `config` and generate one drawing with the supplied random source.
#[tracing::instrument(level = "debug", skip_all, fields(style = ?config.style, count = config.count))]
pub fn draw<R: Rng>(config: &CurveConfig, rng: &mut R) -> StonkResult<Drawing> {
    config.validate()?;
    let Canvas { width, height } = config.canvas;

    let shape = match config.style {
        CurveStyle::Scatter => Shape::Scatter {
            lines: random_segments(width, height, config.count, rng),
        },
        CurveStyle::Polyline => Shape::Polyline {
            points: generate_samples(width, height, config.count, config.max_step_fraction, rng),
        },
        CurveStyle::Smooth => {
            let samples =
                generate_samples(width, height, config.count, config.max_step_fraction, rng);
            let curve = Curve::from_samples(&samples)?;
            Shape::Smooth { samples, curve }
        }
    };

    tracing::debug!(width, height, "generated drawing");
    Ok(Drawing {
        canvas: config.canvas,
        shape,
    })
}

#[cfg(test)]
#[path = "../tests/unit/draw.rs"]
mod tests;
