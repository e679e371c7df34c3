//! Four-way spatial relation between two simple polygons.
//!
//! Purpose
//! - Consume two V-rep polygons, derive both edge sets, and decide the
//!   label with precedence Intersecting > Touching > DisjointEnclosed >
//!   DisjointOutside.
//!
//! Decision order
//! - A transversal crossing uses strictly interior criteria only, so shared
//!   vertices and tangential contact never count as crossings.
//! - Boundary contact is local edge/vertex work and must win over
//!   enclosure: full-vertex containment alone would misreport a touching
//!   pair as enclosed.
//! - Containment runs last; it tests every vertex of one polygon against
//!   the other.
//!
//! Code cross-refs: `geom::{Poly2, Segment2, GeomCfg}`

use std::fmt;

use nalgebra::Vector2;

use crate::geom::{points_equal, GeomCfg, Poly2, Segment2};

/// Spatial relation between two simple polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Some edge pair crosses at a point interior to both segments.
    Intersecting,
    /// Boundary contact (vertex on edge or collinear edge overlap) without
    /// a transversal crossing.
    Touching,
    /// Every vertex of one polygon lies inside or on the other, with no
    /// crossing or contact detected first.
    DisjointEnclosed,
    /// No crossing, no contact, no containment.
    DisjointOutside,
}

impl Relation {
    /// Stable label for presentation layers.
    pub fn label(&self) -> &'static str {
        match self {
            Relation::Intersecting => "Intersecting",
            Relation::Touching => "Touching",
            Relation::DisjointEnclosed => "Disjoint (Enclosed)",
            Relation::DisjointOutside => "Disjoint (Outside)",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify the spatial relation between `a` and `b`.
///
/// Symmetric in its arguments; O(n*m) edge and vertex comparisons.
///
/// Preconditions (not validated): both polygons simple, at least 3
/// vertices, no zero-length edges. Degenerate input yields an unspecified
/// label, never a panic.
pub fn classify(a: &Poly2, b: &Poly2, cfg: GeomCfg) -> Relation {
    let eps = cfg.eps;
    let edges_a = a.edges();
    let edges_b = b.edges();

    if has_interior_crossing(&edges_a, &edges_b, eps) {
        return Relation::Intersecting;
    }
    if has_boundary_contact(a, b, &edges_a, &edges_b, eps) {
        return Relation::Touching;
    }
    let a_in_b = a.vertices.iter().all(|&v| b.contains_eps(v, eps));
    let b_in_a = b.vertices.iter().all(|&v| a.contains_eps(v, eps));
    if a_in_b || b_in_a {
        Relation::DisjointEnclosed
    } else {
        Relation::DisjointOutside
    }
}

/// Some edge pair crosses strictly inside both segments.
///
/// A candidate equal (within eps) to any of the four endpoints is a shared
/// vertex or a tangential touch, not a crossing.
fn has_interior_crossing(edges_a: &[Segment2], edges_b: &[Segment2], eps: f64) -> bool {
    edges_a.iter().any(|ea| {
        edges_b.iter().any(|eb| match ea.intersect(eb, eps) {
            Some(p) => !is_endpoint_of(p, ea, eps) && !is_endpoint_of(p, eb, eps),
            None => false,
        })
    })
}

#[inline]
fn is_endpoint_of(p: Vector2<f64>, seg: &Segment2, eps: f64) -> bool {
    points_equal(p, seg.p1, eps) || points_equal(p, seg.p2, eps)
}

/// Vertex-on-edge contact in either direction, or collinear edge overlap.
///
/// The overlap test is gated on collinearity; see
/// `Segment2::overlaps_collinear`.
fn has_boundary_contact(
    a: &Poly2,
    b: &Poly2,
    edges_a: &[Segment2],
    edges_b: &[Segment2],
    eps: f64,
) -> bool {
    let vertex_contact = edges_a
        .iter()
        .any(|e| b.vertices.iter().any(|&v| e.contains_eps(v, eps)))
        || edges_b
            .iter()
            .any(|e| a.vertices.iter().any(|&v| e.contains_eps(v, eps)));
    if vertex_contact {
        return true;
    }
    edges_a.iter().any(|ea| {
        edges_b
            .iter()
            .any(|eb| ea.collinear_with(eb, eps) && ea.overlaps_collinear(eb))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
    use nalgebra::vector;
    use proptest::prelude::*;

    fn square(half: f64) -> Poly2 {
        Poly2::from_coords(&[(half, half), (half, -half), (-half, -half), (-half, half)])
    }

    fn unit_square_at(x0: f64, y0: f64) -> Poly2 {
        Poly2::from_coords(&[(x0, y0), (x0 + 1.0, y0), (x0 + 1.0, y0 + 1.0), (x0, y0 + 1.0)])
    }

    #[test]
    fn polygon_against_itself_is_touching() {
        let p = square(4.0);
        assert_eq!(classify(&p, &p, GeomCfg::default()), Relation::Touching);
    }

    #[test]
    fn squares_sharing_an_edge_touch() {
        let a = unit_square_at(0.0, 0.0);
        let b = unit_square_at(1.0, 0.0);
        assert_eq!(classify(&a, &b, GeomCfg::default()), Relation::Touching);
    }

    #[test]
    fn squares_sharing_one_vertex_touch() {
        let a = unit_square_at(0.0, 0.0);
        let b = unit_square_at(1.0, 1.0);
        assert_eq!(classify(&a, &b, GeomCfg::default()), Relation::Touching);
    }

    #[test]
    fn overlapping_squares_intersect() {
        // Edges cross away from every vertex.
        let a = square(4.0);
        let b = square(4.0).translated(vector![3.0, 3.0]);
        assert_eq!(classify(&a, &b, GeomCfg::default()), Relation::Intersecting);
        assert_eq!(classify(&b, &a, GeomCfg::default()), Relation::Intersecting);
    }

    #[test]
    fn contact_wins_over_enclosure() {
        // Fully inside by vertex containment, but one edge rests on the
        // boundary of the outer square.
        let a = square(4.0);
        let b = Poly2::from_coords(&[(4.0, 1.0), (4.0, -1.0), (2.0, -1.0), (2.0, 1.0)]);
        assert_eq!(classify(&a, &b, GeomCfg::default()), Relation::Touching);
    }

    #[test]
    fn nested_squares_are_enclosed() {
        let a = square(4.0);
        let b = square(2.0);
        assert_eq!(classify(&a, &b, GeomCfg::default()), Relation::DisjointEnclosed);
        assert_eq!(classify(&b, &a, GeomCfg::default()), Relation::DisjointEnclosed);
    }

    #[test]
    fn separated_squares_are_outside() {
        let a = square(4.0);
        let b = square(1.0).translated(vector![10.0, 0.0]);
        assert_eq!(classify(&a, &b, GeomCfg::default()), Relation::DisjointOutside);
    }

    #[test]
    fn crossing_triangles_intersect() {
        let a = Poly2::from_coords(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
        let b = Poly2::from_coords(&[(0.0, 2.0), (4.0, 2.0), (2.0, -1.0)]);
        assert_eq!(classify(&a, &b, GeomCfg::default()), Relation::Intersecting);
    }

    // Degenerate input kept from the sample data: the second polygon
    // repeats a vertex, so simplicity is violated and the label is outside
    // the contract. The assertion records observed behavior for
    // regression, nothing more.
    #[test]
    fn duplicated_vertex_sample_is_documented() {
        let a = square(4.0);
        let b = Poly2::from_coords(&[(2.0, 2.0), (2.0, -2.0), (-2.0, -2.0), (2.0, -2.0)]);
        assert_eq!(classify(&a, &b, GeomCfg::default()), Relation::DisjointEnclosed);
    }

    proptest! {
        #[test]
        fn prop_classification_is_symmetric(seed in any::<u64>(), index in 0u64..256) {
            let cfg = GeomCfg::default();
            let a = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed, index });
            let b = draw_polygon_radial(
                RadialCfg::default(),
                ReplayToken { seed: seed.wrapping_add(1), index },
            );
            prop_assert_eq!(classify(&a, &b, cfg), classify(&b, &a, cfg));
        }

        #[test]
        fn prop_self_classification_is_touching(seed in any::<u64>(), index in 0u64..256) {
            let a = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed, index });
            prop_assert_eq!(classify(&a, &a, GeomCfg::default()), Relation::Touching);
        }

        #[test]
        fn prop_far_translate_is_outside(seed in any::<u64>(), index in 0u64..256) {
            let a = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed, index });
            let b = a.translated(vector![1000.0, 0.0]);
            prop_assert_eq!(
                classify(&a, &b, GeomCfg::default()),
                Relation::DisjointOutside
            );
        }
    }
}
