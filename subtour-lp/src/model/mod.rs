//! Problem data: distances, edge indexing and loop results.

mod distance;
mod edges;
mod solution;

pub use distance::DistanceMatrix;
pub use edges::{EdgeIndex, EdgeVars};
pub use solution::{CuttingPlaneResult, LoopStatus};
