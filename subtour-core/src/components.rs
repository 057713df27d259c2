//! Connected components of a solution graph.
//!
//! A disconnected support graph is the cheapest possible certificate that
//! the relaxation decomposed into subtours: every component is separated
//! from the rest by a cut of weight zero.

use crate::cut::Cut;
use crate::graph::SolutionGraph;
use crate::unionfind::UnionFind;

/// Partition of the vertices into connected components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    /// Component label for every vertex, labels are `0..count`.
    pub labels: Vec<usize>,
    /// Number of components.
    pub count: usize,
}

impl Components {
    /// True if the graph is connected.
    pub fn is_connected(&self) -> bool {
        self.count <= 1
    }

    /// One zero-weight cut per component: the component against the rest.
    pub fn cuts(&self) -> Vec<Cut> {
        (0..self.count)
            .map(|c| {
                let side: Vec<bool> = self.labels.iter().map(|&l| l == c).collect();
                Cut::from_mask(&side, 0.0)
            })
            .collect()
    }
}

/// Label the connected components of `graph`.
///
/// Labels follow the order in which components are first met when scanning
/// vertices from 0, so vertex 0 is always in component 0.
pub fn connected_components(graph: &SolutionGraph) -> Components {
    let n = graph.num_vertices();
    let mut uf = UnionFind::new(n);
    for e in graph.edges() {
        uf.union(e.u, e.v);
    }

    let mut root_label = vec![usize::MAX; n];
    let mut labels = vec![0; n];
    let mut count = 0;
    for v in 0..n {
        let r = uf.find(v);
        if root_label[r] == usize::MAX {
            root_label[r] = count;
            count += 1;
        }
        labels[v] = root_label[r];
    }

    Components { labels, count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedEdge;

    fn graph(n: usize, edges: &[(usize, usize, f64)]) -> SolutionGraph {
        SolutionGraph::from_edges(
            n,
            edges.iter().map(|&(u, v, weight)| WeightedEdge { u, v, weight }),
        )
    }

    #[test]
    fn test_connected() {
        let g = graph(4, &[(1, 0, 1.0), (2, 1, 1.0), (3, 2, 1.0), (3, 0, 1.0)]);
        let comp = connected_components(&g);
        assert!(comp.is_connected());
        assert_eq!(comp.labels, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_two_triangles() {
        let g = graph(
            6,
            &[(1, 0, 1.0), (2, 1, 1.0), (2, 0, 1.0), (4, 3, 1.0), (5, 4, 1.0), (5, 3, 1.0)],
        );
        let comp = connected_components(&g);
        assert_eq!(comp.count, 2);
        assert_eq!(comp.labels, vec![0, 0, 0, 1, 1, 1]);

        let cuts = comp.cuts();
        assert_eq!(cuts.len(), 2);
        assert_eq!(cuts[0].left, vec![0, 1, 2]);
        assert_eq!(cuts[0].right, vec![3, 4, 5]);
        assert_eq!(cuts[1].left, vec![3, 4, 5]);
        assert!(cuts.iter().all(|c| c.weight == 0.0));
    }

    #[test]
    fn test_isolated_vertices() {
        let g = graph(5, &[(3, 1, 0.5)]);
        let comp = connected_components(&g);
        assert_eq!(comp.count, 4);
        assert_eq!(comp.labels[1], comp.labels[3]);
        assert_eq!(comp.labels[0], 0);
    }
}
