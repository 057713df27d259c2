//! Cutting-plane refinement of the symmetric TSP relaxation.
//!
//! The loop starts from the degree-constrained LP
//!
//! ```text
//! min   sum_{i<j} d(i,j) x(i,j)
//! s.t.  sum_j x(i,j) = 2          for every city i
//!       0 <= x(i,j) <= 1
//! ```
//!
//! and repeatedly separates the current solution with the graph layer in
//! `subtour_core`. Every violated cut `(S, V\S)` becomes the constraint
//! `sum_{i in S, j not in S} x(i,j) >= 2`, which is handed to the
//! relaxation solver before re-solving.
//!
//! - [`master`]: the [`RelaxationBackend`] boundary and a `minilp` backend
//! - [`model`]: distances, edge variable indexing, loop results
//! - [`cuts`]: constraint synthesis and the monotone constraint pool
//! - [`refine`]: the [`CuttingPlaneSolver`] state machine
//!
//! # Example
//!
//! ```
//! use subtour_lp::{solve_relaxation, CuttingPlaneSettings, DistanceMatrix};
//!
//! let points = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 1.5)];
//! let distances = DistanceMatrix::euclidean(&points).unwrap();
//! let result = solve_relaxation(&distances, &CuttingPlaneSettings::default()).unwrap();
//!
//! assert!(result.status.is_converged());
//! assert!(result.objective > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cuts;
pub mod error;
pub mod master;
pub mod model;
pub mod refine;
pub mod settings;

pub use cuts::{synthesize, synthesize_cut, CutPool, SubtourConstraint};
pub use error::{TspError, TspResult};
pub use master::{LinearExpr, MinilpBackend, Relation, RelaxationBackend, Sense, VarHandle, VarKind};
pub use model::{CuttingPlaneResult, DistanceMatrix, EdgeIndex, EdgeVars, LoopStatus};
pub use refine::{CuttingPlaneSolver, LoopState};
pub use settings::CuttingPlaneSettings;

/// Run the cutting-plane loop to the end with the bundled `minilp` backend.
pub fn solve_relaxation(
    distances: &DistanceMatrix,
    settings: &CuttingPlaneSettings,
) -> TspResult<CuttingPlaneResult> {
    let mut solver =
        CuttingPlaneSolver::new(distances.clone(), MinilpBackend::new(), settings.clone())?;
    solver.solve_to_convergence()
}
