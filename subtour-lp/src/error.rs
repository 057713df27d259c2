//! Error types for the cutting-plane layer.

use subtour_core::GraphError;
use thiserror::Error;

/// Errors that can occur while building or refining the relaxation.
#[derive(Error, Debug)]
pub enum TspError {
    /// Too few cities for a meaningful tour or cut.
    #[error("{0} cities do not make sense, need at least 4")]
    DegenerateInstance(usize),

    /// Distance data failed validation.
    #[error("Invalid distance matrix: {0}")]
    InvalidDistances(String),

    /// The relaxation has no optimal solution.
    #[error("Relaxation is infeasible or unbounded: {0}")]
    InfeasibleOrUnbounded(String),

    /// Values were requested before a successful solve.
    #[error("Relaxation has not been solved")]
    NotSolved,

    /// A variable handle that the backend never issued.
    #[error("Unknown variable handle {0}")]
    UnknownVariable(usize),

    /// The backend cannot represent the requested variable kind.
    #[error("Unsupported variable kind: {0}")]
    UnsupportedVariableKind(String),

    /// The backend returned a solution of the wrong shape.
    #[error("Backend returned {got} values for {expected} variables")]
    ValueCountMismatch {
        /// Values returned.
        got: usize,
        /// Variables requested.
        expected: usize,
    },

    /// Separation failed on the current solution.
    #[error("Separation failed: {0}")]
    Separation(#[from] GraphError),
}

/// Result type for cutting-plane operations.
pub type TspResult<T> = Result<T, TspError>;
