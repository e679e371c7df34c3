//! Classify a few sample polygon pairs and print the labels.
//!
//! Usage:
//!   cargo run -p polyrel --example classify_pairs
//!
//! Each pair is the anchor square against one companion polygon; one
//! companion per relation label.

use polyrel::prelude::*;

fn print_polygon(name: &str, poly: &Poly2) {
    print!("{name}:");
    for v in &poly.vertices {
        print!(" ({}, {})", v.x, v.y);
    }
    println!();
}

fn main() {
    let anchor = Poly2::from_coords(&[(4.0, 4.0), (4.0, -4.0), (-4.0, -4.0), (-4.0, 4.0)]);
    let companions = [
        (
            "crossing square",
            Poly2::from_coords(&[(7.0, 7.0), (7.0, -1.0), (-1.0, -1.0), (-1.0, 7.0)]),
        ),
        (
            "edge neighbor",
            Poly2::from_coords(&[(8.0, 4.0), (8.0, -4.0), (4.0, -4.0), (4.0, 4.0)]),
        ),
        (
            "inner square",
            Poly2::from_coords(&[(2.0, 2.0), (2.0, -2.0), (-2.0, -2.0), (-2.0, 2.0)]),
        ),
        (
            "far square",
            Poly2::from_coords(&[(12.0, 2.0), (12.0, -2.0), (8.0, -2.0), (8.0, 2.0)]),
        ),
    ];

    let cfg = GeomCfg::default();
    print_polygon("anchor", &anchor);
    for (name, poly) in companions.iter() {
        print_polygon(name, poly);
        println!("  -> {}", classify(&anchor, poly, cfg));
    }
}
