//! Separation entry point: connectivity first, min cut second.

use crate::components::connected_components;
use crate::cut::{Cut, SUBTOUR_RHS};
use crate::error::{GraphError, GraphResult};
use crate::graph::SolutionGraph;
use crate::mincut::{min_cut, MinCutStrategy};

/// How the cuts of a [`Separation`] were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationKind {
    /// The support graph fell apart; one cut per component.
    Disconnected {
        /// Number of connected components.
        components: usize,
    },

    /// The support graph is connected; one cut from the min-cut oracle.
    MinCut,
}

/// Result of separating one solution graph.
#[derive(Debug, Clone)]
pub struct Separation {
    /// Weight of the lightest cut found (0 when disconnected).
    pub weight: f64,
    /// Candidate cuts.
    pub cuts: Vec<Cut>,
    /// Where the cuts came from.
    pub kind: SeparationKind,
}

impl Separation {
    /// True if no subtour elimination constraint is violated.
    pub fn is_tour_feasible(&self, tol: f64) -> bool {
        self.weight >= SUBTOUR_RHS - tol
    }

    /// Cuts whose subtour elimination constraint is violated.
    pub fn violated_cuts(&self, tol: f64) -> impl Iterator<Item = &Cut> {
        self.cuts.iter().filter(move |c| c.is_violated(tol))
    }

    /// True if the graph was found disconnected.
    pub fn is_disconnected(&self) -> bool {
        matches!(self.kind, SeparationKind::Disconnected { .. })
    }
}

/// Separate a solution graph.
///
/// A disconnected graph yields one zero-weight cut per component and the
/// min-cut oracle is never consulted. A connected graph yields the single
/// cut returned by `strategy`.
pub fn separate(graph: &SolutionGraph, strategy: &MinCutStrategy) -> GraphResult<Separation> {
    let n = graph.num_vertices();
    if n < 2 {
        return Err(GraphError::TooFewVertices(n));
    }

    let comp = connected_components(graph);
    if !comp.is_connected() {
        log::debug!("support graph has {} components", comp.count);
        return Ok(Separation {
            weight: 0.0,
            cuts: comp.cuts(),
            kind: SeparationKind::Disconnected {
                components: comp.count,
            },
        });
    }

    let cut = min_cut(graph, strategy)?;
    log::debug!(
        "min cut weight {:.6} ({} | {})",
        cut.weight,
        cut.left.len(),
        cut.right.len()
    );
    Ok(Separation {
        weight: cut.weight,
        cuts: vec![cut],
        kind: SeparationKind::MinCut,
    })
}

/// Build the support graph of a flat `n × n` solution and separate it.
pub fn separate_solution(
    values: &[f64],
    n: usize,
    tol: f64,
    strategy: &MinCutStrategy,
) -> GraphResult<Separation> {
    let graph = SolutionGraph::from_solution(values, n, tol)?;
    separate(&graph, strategy)
}
