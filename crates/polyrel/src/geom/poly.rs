//! Simple polygons in V-representation.
//!
//! Purpose
//! - Ordered vertex list with implicit closure: edge `i` connects vertex
//!   `i` to vertex `(i + 1) mod n`, no closing vertex stored.
//! - Boundary-inclusive point membership via edge tests plus a
//!   crossing-number ray cast.
//!
//! Preconditions (not enforced)
//! - At least 3 vertices, no duplicate consecutive vertices, no
//!   self-intersection. Behavior on degenerate input is undefined.

use nalgebra::Vector2;

use super::segment::Segment2;
use super::types::approx_eq;

/// Simple polygon as an ordered, cyclically closed vertex list.
#[derive(Clone, Debug)]
pub struct Poly2 {
    pub vertices: Vec<Vector2<f64>>,
}

impl Poly2 {
    #[inline]
    pub fn new(vertices: Vec<Vector2<f64>>) -> Self {
        Self { vertices }
    }

    /// Construction convenience for coordinate literals in demos and tests.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self {
            vertices: coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect(),
        }
    }

    /// Cyclic edge list, recomputed per call into a locally owned Vec.
    pub fn edges(&self) -> Vec<Segment2> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// Boundary-inclusive membership test.
    ///
    /// A point on any edge counts as inside. Otherwise a crossing-number
    /// ray cast along `y = p.y` toward `x -> +inf` decides by parity.
    /// Horizontal edges are skipped before the division, keeping the
    /// `v2.y - v1.y` denominator away from zero.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let n = self.vertices.len();
        let mut crossings = 0usize;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            if Segment2::new(v1, v2).contains_eps(p, eps) {
                return true;
            }
            if approx_eq(v1.y, v2.y, eps) {
                continue;
            }
            if p.y < v1.y.min(v2.y) || p.y > v1.y.max(v2.y) {
                continue;
            }
            let x_hit = (p.y - v1.y) * (v2.x - v1.x) / (v2.y - v1.y) + v1.x;
            // Second boundary guard: the ray meets the boundary within eps
            // of p itself.
            if approx_eq(x_hit, p.x, eps) {
                return true;
            }
            if x_hit > p.x {
                crossings += 1;
            }
        }
        crossings % 2 == 1
    }

    /// Vertex-wise translation.
    pub fn translated(&self, t: Vector2<f64>) -> Poly2 {
        Poly2 {
            vertices: self.vertices.iter().map(|v| v + t).collect(),
        }
    }

    /// Vertex-wise scaling about the origin.
    pub fn scaled(&self, s: f64) -> Poly2 {
        Poly2 {
            vertices: self.vertices.iter().map(|v| v * s).collect(),
        }
    }
}
