//! Infinite lines in implicit general form.

use nalgebra::Vector2;

use super::types::approx_eq;

/// Infinite line `a x + b y + c = 0`, derived from two points.
///
/// Derived per use and never cached. Two coincident source points produce
/// the degenerate all-zero line; rejecting that input is the caller's
/// concern.
#[derive(Clone, Copy, Debug)]
pub struct Line2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line2 {
    /// Line through `p` and `q`: `a = q.y - p.y`, `b = p.x - q.x`,
    /// `c = q.x p.y - p.x q.y`.
    #[inline]
    pub fn through(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        Self {
            a: q.y - p.y,
            b: p.x - q.x,
            c: q.x * p.y - p.x * q.y,
        }
    }

    /// Signed residual `a x + b y + c` at `p`.
    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Membership within `eps` of the line.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        approx_eq(self.eval(p), 0.0, eps)
    }

    /// Unique intersection point with `other`, if any.
    ///
    /// Parallel or coincident lines (determinant within `eps` of zero) are
    /// a `None`, not an error. The eps guard runs before the division, so
    /// no NaN or infinity can propagate from a near-zero determinant.
    pub fn intersect(&self, other: &Line2, eps: f64) -> Option<Vector2<f64>> {
        let det = self.a * other.b - other.a * self.b;
        if approx_eq(det, 0.0, eps) {
            return None;
        }
        let x = (self.b * other.c - other.b * self.c) / det;
        let y = (other.a * self.c - self.a * other.c) / det;
        Some(Vector2::new(x, y))
    }
}
