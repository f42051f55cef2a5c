use crate::foundation::error::{StonkError, StonkResult};

pub use kurbo::{BezPath, CubicBez, Line, Point, Vec2};

/// Drawable area the decoration is generated for, in pixels or abstract units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width of the drawable area.
    pub width: f64,
    /// Height of the drawable area.
    pub height: f64,
}

impl Canvas {
    /// Build a canvas, rejecting zero-area, negative or non-finite sizes.
    pub fn new(width: f64, height: f64) -> StonkResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check the canvas invariants on an already constructed value (e.g. after deserializing).
    pub fn validate(&self) -> StonkResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(StonkError::validation(format!(
                "canvas width must be finite and > 0, got {}",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(StonkError::validation(format!(
                "canvas height must be finite and > 0, got {}",
                self.height
            )));
        }
        Ok(())
    }

    /// Vertical center line; random walks start here.
    pub fn mid_y(self) -> f64 {
        self.height / 2.0
    }

    /// Whether `p` lies inside the closed rectangle `[0, width] x [0, height]`.
    pub fn contains(self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
