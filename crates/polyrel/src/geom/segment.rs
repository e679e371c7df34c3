//! Bounded segments between two endpoints.

use nalgebra::Vector2;

use super::line::Line2;

/// Closed segment from `p1` to `p2`.
#[derive(Clone, Copy, Debug)]
pub struct Segment2 {
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
}

/// Closed-interval test with unordered bounds.
#[inline]
fn between(a: f64, b: f64, c: f64) -> bool {
    a.min(b) <= c && c <= a.max(b)
}

impl Segment2 {
    #[inline]
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self { p1, p2 }
    }

    /// Carrier line, derived per call.
    #[inline]
    pub fn line(&self) -> Line2 {
        Line2::through(self.p1, self.p2)
    }

    /// Membership: on the carrier line and inside the bounding box.
    ///
    /// The box bounds are inclusive and exact. Given prior line membership,
    /// box inclusion equals "between the endpoints along the line".
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        if !self.line().contains_eps(p, eps) {
            return false;
        }
        between(self.p1.x, self.p2.x, p.x) && between(self.p1.y, self.p2.y, p.y)
    }

    /// Intersection point with `other`, if the carrier lines meet at a
    /// point inside both segments' extents.
    pub fn intersect(&self, other: &Segment2, eps: f64) -> Option<Vector2<f64>> {
        let p = self.line().intersect(&other.line(), eps)?;
        if self.contains_eps(p, eps) && other.contains_eps(p, eps) {
            Some(p)
        } else {
            None
        }
    }

    /// Both endpoints of `other` lie on this segment's carrier line.
    pub fn collinear_with(&self, other: &Segment2, eps: f64) -> bool {
        let line = self.line();
        line.contains_eps(other.p1, eps) && line.contains_eps(other.p2, eps)
    }

    /// Per-axis interval overlap for segments already known collinear.
    ///
    /// Valid only after `collinear_with`: with a shared carrier line,
    /// independent x and y overlap equals 1D overlap along that line. Not a
    /// general bounding-box overlap test.
    pub fn overlaps_collinear(&self, other: &Segment2) -> bool {
        let on_x = between(self.p1.x, self.p2.x, other.p1.x)
            || between(self.p1.x, self.p2.x, other.p2.x)
            || between(other.p1.x, other.p2.x, self.p1.x)
            || between(other.p1.x, other.p2.x, self.p2.x);
        let on_y = between(self.p1.y, self.p2.y, other.p1.y)
            || between(self.p1.y, self.p2.y, other.p2.y)
            || between(other.p1.y, other.p2.y, self.p1.y)
            || between(other.p1.y, other.p2.y, self.p2.y);
        on_x && on_y
    }
}
