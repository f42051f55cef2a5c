use rand::Rng;

use crate::foundation::core::{Line, Point};

/// Scatter `count` independent straight segments over a `width` x `height` area.
///
/// Both endpoints of every segment are uniform in `[0, width) x [0, height)`. An axis with
/// non-positive extent collapses to `0` instead of panicking.
pub fn random_segments<R: Rng>(width: f64, height: f64, count: usize, rng: &mut R) -> Vec<Line> {
    (0..count)
        .map(|_| {
            let p0 = random_point(width, height, rng);
            let p1 = random_point(width, height, rng);
            Line::new(p0, p1)
        })
        .collect()
}

fn random_point<R: Rng>(width: f64, height: f64, rng: &mut R) -> Point {
    Point::new(unit_span(width, rng), unit_span(height, rng))
}

fn unit_span<R: Rng>(extent: f64, rng: &mut R) -> f64 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/scatter.rs"]
mod tests;
