//! JSON input format for polygon pairs.
//!
//! A pair document is `{"first": [[x, y], ...], "second": [[x, y], ...]}`.
//! Validation happens here, at the presentation boundary: the core assumes
//! simple polygons with at least 3 finite vertices and never checks, so
//! this layer fails fast instead of handing it a meaningless vertex list.

use anyhow::{bail, Context, Result};
use polyrel::geom::Poly2;
use polyrel::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk polygon pair.
#[derive(Debug, Serialize, Deserialize)]
pub struct PairDoc {
    pub first: Vec<[f64; 2]>,
    pub second: Vec<[f64; 2]>,
}

impl PairDoc {
    /// Convert both vertex lists, rejecting input the core cannot accept.
    pub fn into_polys(self) -> Result<(Poly2, Poly2)> {
        Ok((
            to_poly("first", &self.first)?,
            to_poly("second", &self.second)?,
        ))
    }
}

fn to_poly(name: &str, coords: &[[f64; 2]]) -> Result<Poly2> {
    if coords.len() < 3 {
        bail!(
            "polygon '{name}' has {} vertices, need at least 3",
            coords.len()
        );
    }
    if coords.iter().flatten().any(|c| !c.is_finite()) {
        bail!("polygon '{name}' has a non-finite coordinate");
    }
    Ok(Poly2::new(
        coords.iter().map(|&[x, y]| Vec2::new(x, y)).collect(),
    ))
}

/// Load a pair document from a JSON file.
pub fn load_pair<P: AsRef<Path>>(path: P) -> Result<PairDoc> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}
