//! Tolerance configuration and explicit scalar/point comparisons.
//!
//! - `GeomCfg`: centralizes the absolute epsilon used by every predicate.
//! - `approx_eq`, `points_equal`: explicit comparison functions; tolerant
//!   equality is never hidden behind an operator overload.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
///
/// A single absolute epsilon serves every equality, boundary, and
/// degeneracy check. An absolute tolerance is scale dependent: inputs with
/// extreme coordinate magnitudes can misclassify. Known limitation, kept.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-6 }
    }
}

/// Absolute-tolerance scalar equality: `|a - b| < eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Component-wise point equality within `eps`.
#[inline]
pub fn points_equal(p: Vector2<f64>, q: Vector2<f64>, eps: f64) -> bool {
    approx_eq(p.x, q.x, eps) && approx_eq(p.y, q.y, eps)
}
