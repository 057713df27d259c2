//! Weighted support graph of a fractional edge solution.
//!
//! The relaxation reports one value per city pair, laid out as a flat
//! `n × n` row-major matrix in which only the strictly lower triangle
//! (`i > j`) carries meaning. Values below the tolerance are dropped:
//! a zero-weight edge can never contribute to a cut.

use crate::error::{GraphError, GraphResult};

/// Default numerical tolerance for solver values.
pub const DEFAULT_TOL: f64 = 1e-5;

/// Position of the unordered pair `{i, j}` in a flat `n × n` solution.
///
/// Always addresses the lower triangle: `max(i, j) * n + min(i, j)`.
#[inline]
pub fn flat_index(i: usize, j: usize, n: usize) -> usize {
    let (hi, lo) = if i > j { (i, j) } else { (j, i) };
    hi * n + lo
}

/// An undirected weighted edge with `u > v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    /// Larger endpoint.
    pub u: usize,
    /// Smaller endpoint.
    pub v: usize,
    /// Edge weight (strictly positive).
    pub weight: f64,
}

/// Undirected graph on cities `0..n` induced by a solution vector.
#[derive(Debug, Clone)]
pub struct SolutionGraph {
    n: usize,
    edges: Vec<WeightedEdge>,
    adj: Vec<Vec<(usize, f64)>>,
}

impl SolutionGraph {
    /// Build the support graph of a flat `n × n` solution.
    ///
    /// Only entries with `i > j` are read. An entry becomes an edge when its
    /// value is at least `tol`; its weight is the value itself.
    pub fn from_solution(values: &[f64], n: usize, tol: f64) -> GraphResult<Self> {
        if values.is_empty() {
            return Err(GraphError::EmptySolution);
        }
        if values.len() != n * n {
            return Err(GraphError::DimensionMismatch {
                len: values.len(),
                expected: n * n,
                n,
            });
        }

        let mut edges = Vec::new();
        for i in 0..n {
            for j in 0..i {
                let val = values[i * n + j];
                if val >= tol {
                    edges.push(WeightedEdge {
                        u: i,
                        v: j,
                        weight: val.max(0.0),
                    });
                }
            }
        }

        Ok(Self::from_edges(n, edges))
    }

    /// Build a graph directly from an edge list.
    ///
    /// Endpoints are normalized so that `u > v`; self-loops and edges with
    /// non-positive weight are discarded. Parallel edges are kept and act
    /// as a single edge with the summed weight.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = WeightedEdge>) -> Self {
        let mut adj = vec![Vec::new(); n];
        let mut kept = Vec::new();

        for e in edges {
            if e.u == e.v || e.weight <= 0.0 || e.u >= n || e.v >= n {
                continue;
            }
            let (u, v) = if e.u > e.v { (e.u, e.v) } else { (e.v, e.u) };
            adj[u].push((v, e.weight));
            adj[v].push((u, e.weight));
            kept.push(WeightedEdge { u, v, weight: e.weight });
        }

        Self { n, edges: kept, adj }
    }

    /// Number of vertices (cities).
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// Number of edges with positive weight.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// All edges.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Neighbors of `v` with the connecting edge weight.
    pub fn neighbors(&self, v: usize) -> &[(usize, f64)] {
        &self.adj[v]
    }

    /// Weighted degree of `v`.
    pub fn degree(&self, v: usize) -> f64 {
        self.adj[v].iter().map(|&(_, w)| w).sum()
    }

    /// Total edge weight.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Weight of the edges crossing a bipartition.
    ///
    /// `side[v]` tells which side vertex `v` is on.
    pub fn cut_weight(&self, side: &[bool]) -> f64 {
        self.edges
            .iter()
            .filter(|e| side[e.u] != side[e.v])
            .map(|e| e.weight)
            .sum()
    }

    /// Dense symmetric `n × n` weight matrix, parallel edges summed.
    pub fn dense_weights(&self) -> Vec<f64> {
        let n = self.n;
        let mut w = vec![0.0; n * n];
        for e in &self.edges {
            w[e.u * n + e.v] += e.weight;
            w[e.v * n + e.u] += e.weight;
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(u: usize, v: usize, weight: f64) -> WeightedEdge {
        WeightedEdge { u, v, weight }
    }

    #[test]
    fn test_flat_index_symmetric() {
        assert_eq!(flat_index(3, 1, 5), 16);
        assert_eq!(flat_index(1, 3, 5), 16);
        assert_eq!(flat_index(4, 0, 5), 20);
    }

    #[test]
    fn test_from_solution_drops_small_values() {
        let n = 4;
        let mut x = vec![0.0; n * n];
        x[flat_index(1, 0, n)] = 1.0;
        x[flat_index(2, 1, n)] = 0.5;
        x[flat_index(3, 2, n)] = 1e-7; // below tolerance
        x[flat_index(3, 0, n)] = -1e-9; // solver noise
        // Upper triangle is ignored.
        x[0 * n + 3] = 1.0;

        let g = SolutionGraph::from_solution(&x, n, DEFAULT_TOL).unwrap();
        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 2);
        assert!((g.total_weight() - 1.5).abs() < 1e-12);
        assert!(g.edges().iter().all(|e| e.u > e.v));
    }

    #[test]
    fn test_from_solution_errors() {
        assert_eq!(
            SolutionGraph::from_solution(&[], 4, DEFAULT_TOL).unwrap_err(),
            GraphError::EmptySolution
        );

        let err = SolutionGraph::from_solution(&[0.0; 10], 4, DEFAULT_TOL).unwrap_err();
        assert_eq!(
            err,
            GraphError::DimensionMismatch {
                len: 10,
                expected: 16,
                n: 4
            }
        );
    }

    #[test]
    fn test_from_edges_normalizes() {
        let g = SolutionGraph::from_edges(
            3,
            vec![edge(0, 2, 1.0), edge(1, 1, 5.0), edge(2, 1, 0.0), edge(1, 0, 0.5)],
        );
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.edges()[0], edge(2, 0, 1.0));
        assert!((g.degree(0) - 1.5).abs() < 1e-12);
        assert_eq!(g.neighbors(2), &[(0, 1.0)]);
    }

    #[test]
    fn test_cut_weight_and_dense() {
        let g = SolutionGraph::from_edges(
            4,
            vec![edge(1, 0, 1.0), edge(2, 1, 0.5), edge(3, 2, 1.0), edge(3, 0, 0.5)],
        );
        let side = [true, true, false, false];
        assert!((g.cut_weight(&side) - 1.0).abs() < 1e-12);

        let w = g.dense_weights();
        assert_eq!(w[1 * 4 + 0], 1.0);
        assert_eq!(w[0 * 4 + 1], 1.0);
        assert_eq!(w[0 * 4 + 2], 0.0);
    }
}
