//! Stoer–Wagner global minimum cut.
//!
//! Each phase grows a set A from an arbitrary start vertex, always adding
//! the vertex most tightly connected to A. The last vertex added, against
//! everything else, is the "cut of the phase"; it is then merged into the
//! vertex added just before it. After `n - 1` phases the lightest cut of
//! any phase is a global minimum cut.

use super::check_preconditions;
use crate::cut::Cut;
use crate::error::GraphResult;
use crate::graph::SolutionGraph;

/// Exact global minimum cut of a connected graph.
///
/// Runs on a dense weight matrix, `O(n^3)` time and `O(n^2)` memory. Vertices
/// merged during contraction end up on the side of their representative.
pub fn stoer_wagner_min_cut(graph: &SolutionGraph) -> GraphResult<Cut> {
    check_preconditions(graph)?;

    let n = graph.num_vertices();
    let mut w = graph.dense_weights();

    // Original vertices folded into each super-vertex.
    let mut members: Vec<Vec<usize>> = (0..n).map(|v| vec![v]).collect();
    let mut active: Vec<usize> = (0..n).collect();

    let mut best_weight = f64::INFINITY;
    let mut best_side: Vec<usize> = Vec::new();

    let mut in_a = vec![false; n];
    let mut key = vec![0.0; n];

    while active.len() > 1 {
        for &v in &active {
            in_a[v] = false;
            key[v] = 0.0;
        }

        let start = active[0];
        in_a[start] = true;
        for &v in &active {
            key[v] = w[start * n + v];
        }

        let mut prev = start;
        let mut last = start;
        for _ in 1..active.len() {
            let mut next = None;
            let mut max_key = f64::NEG_INFINITY;
            for &v in &active {
                if !in_a[v] && key[v] > max_key {
                    max_key = key[v];
                    next = Some(v);
                }
            }
            let Some(v) = next else { break };

            in_a[v] = true;
            prev = last;
            last = v;
            for &u in &active {
                if !in_a[u] {
                    key[u] += w[v * n + u];
                }
            }
        }

        let phase_weight = key[last];
        if phase_weight < best_weight {
            best_weight = phase_weight;
            best_side = members[last].clone();
        }

        // Merge `last` into `prev`.
        let moved = std::mem::take(&mut members[last]);
        members[prev].extend(moved);
        for &u in &active {
            if u != prev && u != last {
                let merged = w[prev * n + u] + w[last * n + u];
                w[prev * n + u] = merged;
                w[u * n + prev] = merged;
            }
        }
        active.retain(|&u| u != last);
    }

    let mut side = vec![false; n];
    for &v in &best_side {
        side[v] = true;
    }

    // Weight from the input edges, not the accumulated sums.
    let weight = graph.cut_weight(&side);
    log::trace!(
        "stoer-wagner: n={} phase weight {:.6} crossing weight {:.6}",
        n,
        best_weight,
        weight
    );
    Ok(Cut::from_mask(&side, weight))
}
