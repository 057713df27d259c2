//! Global minimum cut oracle.
//!
//! Two interchangeable strategies behind one contract: given a connected
//! graph with at least two vertices and positive edge weights, return a
//! bipartition of all vertices and the weight crossing it.
//!
//! - [`MinCutStrategy::StoerWagner`]: exact, deterministic.
//! - [`MinCutStrategy::Randomized`]: weighted random contraction, repeated
//!   `trials` times. Each trial finds a true minimum cut only with bounded
//!   probability, so the lightest of several trials is kept.

mod karger;
mod stoer_wagner;

pub use karger::{karger_min_cut, repeated_karger_min_cut};
pub use stoer_wagner::stoer_wagner_min_cut;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::components::connected_components;
use crate::cut::Cut;
use crate::error::{GraphError, GraphResult};
use crate::graph::SolutionGraph;

/// Which min-cut algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinCutStrategy {
    /// Exact Stoer–Wagner contraction.
    #[default]
    StoerWagner,

    /// Karger-style random contraction weighted by edge weight.
    Randomized {
        /// Seed for the ChaCha8 generator.
        seed: u64,
        /// Independent contraction runs; the lightest cut wins.
        trials: usize,
    },
}

impl MinCutStrategy {
    /// Randomized strategy with the given seed and trial count.
    pub fn randomized(seed: u64, trials: usize) -> Self {
        MinCutStrategy::Randomized { seed, trials }
    }

    /// True for the randomized strategy.
    pub fn is_randomized(&self) -> bool {
        matches!(self, MinCutStrategy::Randomized { .. })
    }

    /// Same strategy with the seed mixed with `salt`.
    ///
    /// Lets a caller draw fresh samples on every separation round while
    /// staying reproducible. The deterministic strategy is returned as is.
    pub fn reseeded(&self, salt: u64) -> Self {
        match *self {
            MinCutStrategy::StoerWagner => MinCutStrategy::StoerWagner,
            MinCutStrategy::Randomized { seed, trials } => MinCutStrategy::Randomized {
                seed: seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15),
                trials,
            },
        }
    }
}

/// Compute a global minimum cut with the chosen strategy.
pub fn min_cut(graph: &SolutionGraph, strategy: &MinCutStrategy) -> GraphResult<Cut> {
    match *strategy {
        MinCutStrategy::StoerWagner => stoer_wagner_min_cut(graph),
        MinCutStrategy::Randomized { seed, trials } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            repeated_karger_min_cut(graph, &mut rng, trials)
        }
    }
}

/// Reject graphs outside the oracle contract.
pub(crate) fn check_preconditions(graph: &SolutionGraph) -> GraphResult<()> {
    let n = graph.num_vertices();
    if n < 2 {
        return Err(GraphError::TooFewVertices(n));
    }
    let comp = connected_components(graph);
    if !comp.is_connected() {
        return Err(GraphError::Disconnected(comp.count));
    }
    Ok(())
}
