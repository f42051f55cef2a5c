use kurbo::ParamCurve;

use crate::foundation::core::{BezPath, CubicBez, Point};
use crate::foundation::error::{StonkError, StonkResult};

/// One cubic Bezier piece of a smoothed curve.
///
/// The start point is implicit: it is the previous segment's `end`, or the curve start for the
/// first segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BezierSegment {
    /// Control point leaving the segment start.
    pub cp1: Point,
    /// Control point entering the segment end.
    pub cp2: Point,
    /// Segment end point; always one of the input samples.
    pub end: Point,
}

impl BezierSegment {
    /// Materialize the segment as a `kurbo` cubic starting at `start`.
    pub fn to_cubic(self, start: Point) -> CubicBez {
        CubicBez::new(start, self.cp1, self.cp2, self.end)
    }
}

/// Smooth an ordered point sequence into a Catmull-Rom-derived cubic Bezier spline.
///
/// For every consecutive pair `(p1, p2)` the neighbors `p0` and `p3` are taken from the sequence,
/// substituting the nearest endpoint at the boundaries, and the controls are
/// `cp1 = p1 + (p2 - p0) / 6` and `cp2 = p2 - (p3 - p1) / 6`.
///
/// Returns `points.len() - 1` segments. Fewer than two points yields no segments.
pub fn smooth_to_bezier(points: &[Point]) -> Vec<BezierSegment> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let p1 = points[i];
        let p2 = points[i + 1];
        let p0 = if i == 0 { p1 } else { points[i - 1] };
        let p3 = points.get(i + 2).copied().unwrap_or(p2);

        out.push(BezierSegment {
            cp1: p1 + (p2 - p0) / 6.0,
            cp2: p2 - (p3 - p1) / 6.0,
            end: p2,
        });
    }
    out
}

/// A smoothed curve: its start point plus the segments that follow it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Curve {
    /// First sample point; the implicit start of the first segment.
    pub start: Point,
    /// Bezier segments in drawing order.
    pub segments: Vec<BezierSegment>,
}

impl Curve {
    /// Smooth `points` into a curve. Needs at least two points.
    pub fn from_samples(points: &[Point]) -> StonkResult<Self> {
        if points.len() < 2 {
            return Err(StonkError::validation(format!(
                "a curve needs at least 2 sample points, got {}",
                points.len()
            )));
        }
        Ok(Self {
            start: points[0],
            segments: smooth_to_bezier(points),
        })
    }

    /// Last point of the curve.
    pub fn end(&self) -> Point {
        self.segments.last().map(|s| s.end).unwrap_or(self.start)
    }

    /// Iterate the segments as explicit `kurbo` cubics.
    pub fn cubics(&self) -> impl Iterator<Item = CubicBez> + '_ {
        let mut prev = self.start;
        self.segments.iter().map(move |seg| {
            let c = seg.to_cubic(prev);
            prev = seg.end;
            c
        })
    }

    /// Evaluate the curve at a global parameter `t` in `[0, segments.len()]`.
    ///
    /// The integer part selects the segment and the fraction is the local parameter. Values
    /// outside the range are clamped to the curve ends.
    pub fn point_at(&self, t: f64) -> Point {
        let n = self.segments.len();
        if n == 0 || t.is_nan() || t <= 0.0 {
            return self.start;
        }
        if t >= n as f64 {
            return self.end();
        }
        let idx = (t.floor() as usize).min(n - 1);
        let local = t - idx as f64;
        let start = if idx == 0 {
            self.start
        } else {
            self.segments[idx - 1].end
        };
        self.segments[idx].to_cubic(start).eval(local)
    }

    /// Convert into a `kurbo` path (`move_to` followed by one `curve_to` per segment).
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        for seg in &self.segments {
            path.curve_to(seg.cp1, seg.cp2, seg.end);
        }
        path
    }
}

/// Join `points` with straight segments. Empty input gives an empty path.
pub fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/curve/spline.rs"]
mod tests;
