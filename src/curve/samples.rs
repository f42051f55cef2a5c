use rand::Rng;

use crate::foundation::core::Point;

/// Number of walk steps used when none is configured.
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// Largest vertical change per step, as a fraction of the canvas height.
pub const DEFAULT_MAX_STEP_FRACTION: f64 = 0.05;

/// Generate a bounded random walk across a `width` x `height` area.
///
/// The walk starts at `height / 2` and takes `count` evenly spaced steps along x, so the result
/// holds exactly `count + 1` points with `x = i * width / count`. Each step after the first moves
/// y by a uniform delta in `[-height * max_step_fraction, +height * max_step_fraction]` and the
/// result is clamped into `[0, height]`.
///
/// # Preconditions
///
/// `width > 0`, `height > 0`, `count > 0` and `max_step_fraction > 0`. Violations never panic but
/// the output shape is not meaningful: `count == 0` yields the single start point and a
/// non-positive, NaN or overflowing step size keeps the walk flat.
pub fn generate_samples<R: Rng>(
    width: f64,
    height: f64,
    count: usize,
    max_step_fraction: f64,
    rng: &mut R,
) -> Vec<Point> {
    let start = height / 2.0;
    if count == 0 {
        return vec![Point::new(0.0, start)];
    }

    let max_step = height * max_step_fraction;
    let mut out = Vec::with_capacity(count + 1);
    let mut y = start;
    for i in 0..=count {
        // `count / count` is exactly 1.0, so the last x lands on `width`.
        let x = width * ((i as f64) / (count as f64));
        if i > 0 {
            // The sampled span is `2 * max_step`; rand panics when it overflows.
            let delta = if max_step > 0.0 && (2.0 * max_step).is_finite() {
                rng.gen_range(-max_step..=max_step)
            } else {
                0.0
            };
            // Not `f64::clamp`: it panics when height is negative.
            y = (y + delta).max(0.0).min(height);
        }
        out.push(Point::new(x, y));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/curve/samples.rs"]
mod tests;
