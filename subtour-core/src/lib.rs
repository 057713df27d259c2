//! Graph layer of the subtour separation oracle.
//!
//! Given a fractional edge solution of the symmetric TSP relaxation, this
//! crate builds the weighted support graph, checks it for connectivity and
//! computes a global minimum cut. The resulting [`Cut`]s are the raw
//! material for subtour elimination constraints.
//!
//! - [`graph`]: flat solution vector to weighted undirected graph
//! - [`components`]: connected components via union-find
//! - [`mincut`]: Stoer–Wagner and weighted random contraction
//! - [`separate`]: connectivity short-circuit followed by the min-cut oracle
//! - [`tour`]: tracing an integral solution as a cycle
//!
//! Nothing here owns solver state; every entry point is a function of a
//! graph value.
//!
//! # Example
//!
//! ```
//! use subtour_core::{separate, MinCutStrategy, SolutionGraph};
//!
//! // Two disjoint 2-cycles on four cities: (0,1) and (2,3).
//! let n = 4;
//! let mut x = vec![0.0; n * n];
//! x[1 * n + 0] = 1.0;
//! x[3 * n + 2] = 1.0;
//!
//! let graph = SolutionGraph::from_solution(&x, n, 1e-5).unwrap();
//! let sep = separate(&graph, &MinCutStrategy::StoerWagner).unwrap();
//! assert_eq!(sep.cuts.len(), 2);
//! assert_eq!(sep.weight, 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod cut;
pub mod error;
pub mod graph;
pub mod mincut;
pub mod separate;
pub mod tour;
pub mod unionfind;

pub use components::{connected_components, Components};
pub use cut::{Cut, SUBTOUR_RHS};
pub use error::{GraphError, GraphResult};
pub use graph::{flat_index, SolutionGraph, WeightedEdge, DEFAULT_TOL};
pub use mincut::{karger_min_cut, min_cut, stoer_wagner_min_cut, MinCutStrategy};
pub use separate::{separate, separate_solution, Separation, SeparationKind};
pub use tour::{is_integral, trace_tour};
pub use unionfind::UnionFind;
