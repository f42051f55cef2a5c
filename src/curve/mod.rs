//! Geometry core: random-walk sampling, spline smoothing and the scatter variant.
//!
//! Everything here is pure and synchronous. Randomness is always injected by the caller so a
//! seeded generator reproduces a drawing exactly.

pub(crate) mod samples;
pub(crate) mod scatter;
pub(crate) mod spline;
