//! Random instance ensembles and TSPLIB output.

use std::f64::consts::PI;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use rand::Rng;

/// Coordinate scale used when writing TSPLIB files.
const TSPLIB_SCALE: f64 = 1e5;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Ensemble {
    /// Uniform points in the unit square.
    Square,
    /// Points scattered around a circle of radius 0.25.
    Dce,
}

impl Ensemble {
    pub fn name(self) -> &'static str {
        match self {
            Ensemble::Square => "square",
            Ensemble::Dce => "dce",
        }
    }
}

pub fn generate<R: Rng + ?Sized>(
    ensemble: Ensemble,
    n: usize,
    sigma: f64,
    rng: &mut R,
) -> Vec<(f64, f64)> {
    match ensemble {
        Ensemble::Square => (0..n).map(|_| (rng.gen(), rng.gen())).collect(),
        Ensemble::Dce => displaced_circle(n, sigma, rng),
    }
}

/// Points evenly spaced on the circle of radius 0.25 around (0.5, 0.5),
/// each moved by a random radius below `sigma / 2 / n * pi` in a random
/// direction. `sigma = 0` puts every point on the circle, where the
/// polygon is the optimal tour.
fn displaced_circle<R: Rng + ?Sized>(n: usize, sigma: f64, rng: &mut R) -> Vec<(f64, f64)> {
    let max_radius = sigma / 2.0 / n as f64 * PI;
    (0..n)
        .map(|i| {
            let angle = 2.0 * PI / n as f64 * i as f64;
            let r = rng.gen::<f64>() * max_radius;
            let phi = rng.gen::<f64>() * 2.0 * PI;
            (
                0.5 + 0.25 * angle.cos() + r * phi.cos(),
                0.5 + 0.25 * angle.sin() + r * phi.sin(),
            )
        })
        .collect()
}

pub fn to_tsplib(name: &str, points: &[(f64, f64)]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "NAME : {}", name);
    let _ = writeln!(out, "COMMENT : Random Euclidean");
    let _ = writeln!(out, "TYPE : TSP");
    let _ = writeln!(out, "DIMENSION : {}", points.len());
    let _ = writeln!(out, "EDGE_WEIGHT_TYPE : EUC_2D");
    let _ = writeln!(out, "NODE_COORD_SECTION");
    for (i, (x, y)) in points.iter().enumerate() {
        let _ = writeln!(out, "{} {} {}", i + 1, x * TSPLIB_SCALE, y * TSPLIB_SCALE);
    }
    out.push_str("EOF\n");
    out
}

pub fn write_tsplib(path: &Path, points: &[(f64, f64)]) -> Result<()> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("instance");
    std::fs::write(path, to_tsplib(name, points))
        .with_context(|| format!("Failed to write TSPLIB file {}", path.display()))
}
