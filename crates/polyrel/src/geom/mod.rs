//! Epsilon-aware 2D primitives for polygon relation tests.
//!
//! Purpose
//! - Provide the value types the classifier is built from: implicit-form
//!   lines, bounded segments, and V-rep polygons, all compared through one
//!   absolute tolerance (`GeomCfg`).
//! - Keep the API minimal and numerically explicit (eps-aware); degenerate
//!   configurations are negative results, never errors.
//!
//! Why V-rep only
//! - The classifier consumes ordered vertex lists and derives edges on
//!   demand; pairwise relation tests need no hull or H-rep machinery.
//!
//! Code cross-refs: `relation::classify`, `rand::draw_polygon_radial`

pub mod rand;

mod line;
mod poly;
mod segment;
mod types;

pub use line::Line2;
pub use poly::Poly2;
pub use segment::Segment2;
pub use types::{approx_eq, points_equal, GeomCfg};
