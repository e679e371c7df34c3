use anyhow::Result;
use clap::{Parser, Subcommand};
use polyrel::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken};
use polyrel::geom::{GeomCfg, Poly2};
use polyrel::relation::classify;
use std::collections::BTreeMap;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Polygon pair relation classifier")]
struct Cmd {
    /// Tolerance override for all geometric comparisons
    #[arg(long)]
    eps: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify a polygon pair read from a JSON file
    Classify {
        #[arg(long)]
        input: String,
        /// Optional JSON result document
        #[arg(long)]
        out: Option<String>,
    },
    /// Classify the built-in sample pairs
    Example,
    /// Draw random pairs and tally the labels
    Sweep {
        #[arg(long, default_value_t = 7)]
        seed: u64,
        #[arg(long, default_value_t = 100)]
        count: u64,
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = match cmd.eps {
        Some(eps) => GeomCfg { eps },
        None => GeomCfg::default(),
    };
    match cmd.action {
        Action::Classify { input, out } => run_classify(&input, out.as_deref(), cfg),
        Action::Example => run_example(cfg),
        Action::Sweep { seed, count, out } => run_sweep(seed, count, out.as_deref(), cfg),
    }
}

fn run_classify(input: &str, out: Option<&str>, cfg: GeomCfg) -> Result<()> {
    let (a, b) = input::load_pair(input)?.into_polys()?;
    let relation = classify(&a, &b, cfg);
    tracing::info!(input, relation = %relation, "classify");
    println!("Relationship: {relation}");
    if let Some(out) = out {
        write_json(
            out,
            &serde_json::json!({
                "input": input,
                "relation": relation.label(),
            }),
        )?;
    }
    Ok(())
}

fn run_example(cfg: GeomCfg) -> Result<()> {
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
    print_polygon("anchor", &anchor);
    for (name, poly) in companions.iter() {
        let relation = classify(&anchor, poly, cfg);
        tracing::info!(case = *name, relation = %relation, "example");
        print_polygon(name, poly);
        println!("  -> {relation}");
    }
    Ok(())
}

fn run_sweep(seed: u64, count: u64, out: Option<&str>, cfg: GeomCfg) -> Result<()> {
    let mut tally: BTreeMap<&'static str, u64> = BTreeMap::new();
    for index in 0..count {
        let a = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed, index: 2 * index });
        let b = draw_polygon_radial(
            RadialCfg::default(),
            ReplayToken {
                seed,
                index: 2 * index + 1,
            },
        );
        *tally.entry(classify(&a, &b, cfg).label()).or_default() += 1;
    }
    tracing::info!(seed, count, tally = ?tally, "sweep");
    for (label, n) in &tally {
        println!("{label}: {n}");
    }
    if let Some(out) = out {
        write_json(
            out,
            &serde_json::json!({
                "seed": seed,
                "count": count,
                "tally": &tally,
            }),
        )?;
    }
    Ok(())
}

fn print_polygon(name: &str, poly: &Poly2) {
    print!("{name}:");
    for v in &poly.vertices {
        print!(" ({}, {})", v.x, v.y);
    }
    println!();
}

fn write_json(path: &str, doc: &serde_json::Value) -> Result<()> {
    let out_path = Path::new(path);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(doc)?)?;
    Ok(())
}
