//! Weighted random contraction (Karger).
//!
//! Contracting a uniformly chosen edge weighted by its weight is the same
//! as giving every edge an exponential clock of rate `weight` and
//! contracting edges in the order the clocks ring, skipping edges whose
//! endpoints already merged. That turns one contraction run into a
//! Kruskal pass over randomly keyed edges that stops at two super-vertices.

use rand::Rng;

use super::check_preconditions;
use crate::cut::Cut;
use crate::error::{GraphError, GraphResult};
use crate::graph::SolutionGraph;
use crate::unionfind::UnionFind;

/// One contraction run. Heavy edges tend to be contracted early, so the
/// surviving crossing edges are likely to be light.
pub fn karger_min_cut<R: Rng + ?Sized>(graph: &SolutionGraph, rng: &mut R) -> GraphResult<Cut> {
    check_preconditions(graph)?;
    Ok(contract_once(graph, rng))
}

/// Best of `trials` independent contraction runs.
pub fn repeated_karger_min_cut<R: Rng + ?Sized>(
    graph: &SolutionGraph,
    rng: &mut R,
    trials: usize,
) -> GraphResult<Cut> {
    if trials == 0 {
        return Err(GraphError::NoTrials);
    }
    check_preconditions(graph)?;

    let mut best = contract_once(graph, rng);
    for _ in 1..trials {
        let cut = contract_once(graph, rng);
        if cut.weight < best.weight {
            best = cut;
        }
    }
    Ok(best)
}

fn contract_once<R: Rng + ?Sized>(graph: &SolutionGraph, rng: &mut R) -> Cut {
    let n = graph.num_vertices();
    let edges = graph.edges();

    let mut order: Vec<(f64, usize)> = edges
        .iter()
        .enumerate()
        .map(|(i, e)| {
            // 1 - U lies in (0, 1], so the log is finite.
            let u: f64 = rng.gen();
            (-(1.0 - u).ln() / e.weight, i)
        })
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut uf = UnionFind::new(n);
    for &(_, i) in &order {
        if uf.num_sets() <= 2 {
            break;
        }
        let e = edges[i];
        uf.union(e.u, e.v);
    }

    let root = uf.find(0);
    let side: Vec<bool> = (0..n).map(|v| uf.find(v) != root).collect();
    let weight = graph.cut_weight(&side);
    Cut::from_mask(&side, weight)
}
