use std::fmt::Write as _;

use crate::curve::spline::Curve;
use crate::foundation::core::{Line, Point};

/// Encode a smoothed curve as an SVG path `d` attribute.
///
/// Format: `M x0 y0 C cp1x cp1y, cp2x cp2y, x1 y1 C ...`.
pub fn curve_path_data(curve: &Curve) -> String {
    let mut d = String::with_capacity(16 + curve.segments.len() * 48);
    d.push('M');
    push_point(&mut d, curve.start);
    for seg in &curve.segments {
        d.push_str(" C");
        push_point(&mut d, seg.cp1);
        d.push(',');
        push_point(&mut d, seg.cp2);
        d.push(',');
        push_point(&mut d, seg.end);
    }
    d
}

/// Encode a polyline as an SVG path `d` attribute (`M x0 y0 L x1 y1 ...`).
///
/// Empty input gives an empty string.
pub fn polyline_path_data(points: &[Point]) -> String {
    let mut d = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        d.push(if i == 0 { 'M' } else { 'L' });
        push_point(&mut d, *p);
    }
    d
}

/// Encode independent segments as one SVG path with a subpath per segment.
pub fn lines_path_data(lines: &[Line]) -> String {
    let mut d = String::with_capacity(lines.len() * 32);
    for (i, l) in lines.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        d.push('M');
        push_point(&mut d, l.p0);
        d.push_str(" L");
        push_point(&mut d, l.p1);
    }
    d
}

/// Format a coordinate with at most three decimals and no trailing zeros.
pub fn fmt_coord(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    // Adding 0.0 folds -0.0 into 0.0.
    format!("{}", rounded + 0.0)
}

fn push_point(d: &mut String, p: Point) {
    let _ = write!(d, " {} {}", fmt_coord(p.x), fmt_coord(p.y));
}

#[cfg(test)]
#[path = "../../tests/unit/render/path.rs"]
mod tests;
