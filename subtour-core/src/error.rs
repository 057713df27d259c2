//! Error types for the graph layer.

use thiserror::Error;

/// Errors raised while building or analysing a solution graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The solver handed back a zero-length solution.
    #[error("Empty solution vector: the relaxation produced no values")]
    EmptySolution,

    /// Solution length does not match the city count.
    #[error("Solution has {len} entries, expected {expected} for {n} cities")]
    DimensionMismatch {
        /// Observed length.
        len: usize,
        /// Expected length (n * n).
        expected: usize,
        /// City count.
        n: usize,
    },

    /// A city has no incident edge at the integrality threshold.
    #[error("City {city} has no neighbor in the solution graph")]
    NoNeighbor {
        /// The stranded city.
        city: usize,
    },

    /// Min cut was requested on fewer than two vertices.
    #[error("Min cut needs at least two vertices, graph has {0}")]
    TooFewVertices(usize),

    /// Min cut was requested on a disconnected graph.
    #[error("Min cut needs a connected graph, found {0} components")]
    Disconnected(usize),

    /// A randomized strategy was configured with zero trials.
    #[error("Randomized min cut needs at least one trial")]
    NoTrials,
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
