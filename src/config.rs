use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::curve::samples::{DEFAULT_MAX_STEP_FRACTION, DEFAULT_SAMPLE_COUNT};
use crate::foundation::core::Canvas;
use crate::foundation::error::{StonkError, StonkResult};

/// Which revision of the decoration to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveStyle {
    /// Independent random straight segments across the canvas.
    Scatter,
    /// The random walk joined by straight segments.
    Polyline,
    /// The random walk smoothed into a cubic Bezier spline.
    #[default]
    Smooth,
}

/// Stroke applied to the generated lines in SVG output.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrokeStyle {
    /// Any SVG paint value (`green`, `#22c55e`, ...).
    pub color: String,
    /// Stroke width in canvas units.
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "green".to_string(),
            width: 2.0,
        }
    }
}

/// JSON-facing generator configuration. Every field has a default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurveConfig {
    /// Drawable area.
    pub canvas: Canvas,
    /// Decoration variant.
    pub style: CurveStyle,
    /// Walk steps (smooth/polyline) or segment count (scatter).
    pub count: usize,
    /// Largest vertical change per walk step, as a fraction of the canvas height.
    pub max_step_fraction: f64,
    /// Stroke for SVG output.
    pub stroke: StrokeStyle,
    /// Seed for reproducible drawings; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            style: CurveStyle::default(),
            count: DEFAULT_SAMPLE_COUNT,
            max_step_fraction: DEFAULT_MAX_STEP_FRACTION,
            stroke: StrokeStyle::default(),
            seed: None,
        }
    }
}

impl CurveConfig {
    /// Parse a configuration from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> StonkResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| StonkError::serde(format!("parse curve config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json_str(s: &str) -> StonkResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StonkResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StonkError::validation(format!("open curve config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> StonkResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StonkError::serde(e.to_string()))
    }

    /// Check every field against the generator's preconditions.
    pub fn validate(&self) -> StonkResult<()> {
        self.canvas.validate()?;
        if self.count == 0 {
            return Err(StonkError::validation("count must be >= 1"));
        }
        if !self.max_step_fraction.is_finite() || self.max_step_fraction <= 0.0 {
            return Err(StonkError::validation(format!(
                "max_step_fraction must be finite and > 0, got {}",
                self.max_step_fraction
            )));
        }
        if !(2.0 * self.canvas.height * self.max_step_fraction).is_finite() {
            return Err(StonkError::validation(format!(
                "step range overflows: height {} * max_step_fraction {}",
                self.canvas.height, self.max_step_fraction
            )));
        }
        if !self.stroke.width.is_finite() || self.stroke.width <= 0.0 {
            return Err(StonkError::validation(format!(
                "stroke width must be finite and > 0, got {}",
                self.stroke.width
            )));
        }
        if self.stroke.color.trim().is_empty() {
            return Err(StonkError::validation("stroke color must not be empty"));
        }
        Ok(())
    }

    /// Random source for this configuration: seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
