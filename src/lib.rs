//! stonkline generates the decorative "stonks line" drawn behind a page: a bounded random walk
//! across a canvas, optionally smoothed into a Catmull-Rom-derived cubic Bezier spline.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `width, height, count, rng -> Vec<Point>` ([`generate_samples`])
//! 2. **Smooth**: `&[Point] -> Vec<BezierSegment>` ([`smooth_to_bezier`], [`Curve`])
//! 3. **Encode**: SVG path data, a standalone SVG document, or a PNG raster
//!
//! The geometry routines are pure and never fail; degenerate input is a documented precondition.
//! Configuration, serialization and rendering report errors through [`StonkError`].
//!
//! Randomness is always injected. Pass a seeded [`rand::rngs::StdRng`] (or set
//! [`CurveConfig::seed`]) to reproduce a drawing exactly.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod curve;
mod draw;
mod foundation;
mod render;

/// Redraw session driven by mount and resize events.
pub mod session;

pub use config::{CurveConfig, CurveStyle, StrokeStyle};
pub use curve::samples::{DEFAULT_MAX_STEP_FRACTION, DEFAULT_SAMPLE_COUNT, generate_samples};
pub use curve::scatter::random_segments;
pub use curve::spline::{BezierSegment, Curve, polyline_path, smooth_to_bezier};
pub use draw::{Drawing, Shape, draw};
pub use foundation::core::{BezPath, Canvas, CubicBez, Line, Point, Vec2};
pub use foundation::error::{StonkError, StonkResult};
pub use render::path::{curve_path_data, fmt_coord, lines_path_data, polyline_path_data};
pub use render::raster::{RasterImage, RasterOpts, parse_svg, rasterize};
pub use render::svg::svg_document;
pub use session::{CurveSession, ListenerId};
