//! Geometric primitives and the polygon relation classifier.
//!
//! The crate is split into `geom` (eps-aware primitives: implicit-form
//! lines, bounded segments, V-rep polygons, and a deterministic random
//! sampler) and `relation` (the four-way classification of a polygon pair).
//! Presentation concerns (printing, file I/O) live in the `cli` crate; the
//! core is pure functions over immutable values.

pub mod geom;
pub mod relation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports for the single operational entry point.
pub use geom::GeomCfg;
pub use nalgebra::Vector2 as Vec2;
pub use relation::{classify, Relation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom::{approx_eq, points_equal, GeomCfg, Line2, Poly2, Segment2};
    pub use crate::relation::{classify, Relation};
    pub use nalgebra::Vector2 as Vec2;
}
