//! Command-line driver for the subtour cutting-plane loop.

mod instance;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use subtour_core::{separate_solution, MinCutStrategy};
use subtour_lp::{CuttingPlaneSettings, CuttingPlaneSolver, DistanceMatrix, MinilpBackend};

use crate::instance::Ensemble;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyChoice {
    StoerWagner,
    Karger,
}

#[derive(Parser)]
#[command(name = "subtour-bench", about = "Subtour elimination cutting planes on random instances")]
struct Args {
    /// Number of cities
    #[arg(short = 'n', long, default_value_t = 30)]
    cities: usize,

    /// Instance ensemble
    #[arg(short, long, value_enum, default_value_t = Ensemble::Square)]
    ensemble: Ensemble,

    /// Displacement strength for the dce ensemble
    #[arg(long, default_value_t = 1.0)]
    sigma: f64,

    /// Seed for instance generation and the randomized min cut
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Min-cut oracle
    #[arg(long, value_enum, default_value_t = StrategyChoice::StoerWagner)]
    strategy: StrategyChoice,

    /// Contraction runs per separation with the karger oracle
    #[arg(long, default_value_t = 100)]
    trials: usize,

    /// Maximum separation rounds
    #[arg(long)]
    max_rounds: Option<u64>,

    /// Time limit in seconds
    #[arg(long)]
    time_limit: Option<f64>,

    /// Write the instance as a TSPLIB file
    #[arg(long)]
    tsplib: Option<PathBuf>,

    /// Write the JSON summary to a file instead of stdout
    #[arg(long)]
    json: Option<PathBuf>,

    /// Per-round progress and debug output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Summary {
    ensemble: &'static str,
    cities: usize,
    seed: u64,
    strategy: String,
    status: String,
    objective: f64,
    rounds: u64,
    cuts_added: u64,
    duplicates_rejected: usize,
    min_cut_weight: f64,
    integral_tour: bool,
    tour_length: Option<f64>,
    solve_time_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logger(args.verbose).context("Failed to initialize logger")?;

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let points = instance::generate(args.ensemble, args.cities, args.sigma, &mut rng);
    log::info!(
        "{} instance with {} cities (seed {})",
        args.ensemble.name(),
        args.cities,
        args.seed
    );

    if let Some(path) = &args.tsplib {
        instance::write_tsplib(path, &points)?;
        log::info!("wrote {}", path.display());
    }

    let strategy = match args.strategy {
        StrategyChoice::StoerWagner => MinCutStrategy::StoerWagner,
        StrategyChoice::Karger => MinCutStrategy::randomized(args.seed, args.trials),
    };

    let mut settings = CuttingPlaneSettings::verbose().with_strategy(strategy);
    if let Some(rounds) = args.max_rounds {
        settings = settings.with_max_rounds(rounds);
    }
    if let Some(seconds) = args.time_limit {
        settings = settings.with_time_limit(seconds);
    }
    let tol = settings.tol;

    let distances = DistanceMatrix::euclidean(&points).context("Invalid instance")?;
    let mut solver = CuttingPlaneSolver::new(distances, MinilpBackend::new(), settings)
        .context("Failed to build the initial relaxation")?;
    let result = solver
        .solve_to_convergence()
        .context("Cutting-plane loop failed")?;

    let final_cut = separate_solution(&result.x, args.cities, tol, &MinCutStrategy::StoerWagner)
        .context("Failed to separate the final relaxation")?;

    let tour_length = result
        .tour
        .as_ref()
        .map(|tour| solver.distances().tour_length(tour));
    if let Some(length) = tour_length {
        log::info!("relaxation is an optimal tour of length {:.6}", length);
    }

    let summary = Summary {
        ensemble: args.ensemble.name(),
        cities: args.cities,
        seed: args.seed,
        strategy: format!("{:?}", args.strategy),
        status: format!("{:?}", result.status),
        objective: result.objective,
        rounds: result.rounds,
        cuts_added: result.cuts_added,
        duplicates_rejected: solver.pool().stats().duplicates_rejected,
        min_cut_weight: final_cut.weight,
        integral_tour: result.tour.is_some(),
        tour_length,
        solve_time_ms: result.solve_time_ms,
    };

    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    match &args.json {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}
