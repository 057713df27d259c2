//! Cutting-plane loop outcome types.

/// Why the cutting-plane loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    /// Separation found no violated subtour constraint.
    Converged,

    /// Round limit reached before convergence.
    RoundLimit,

    /// Time limit reached before convergence.
    TimeLimit,

    /// Violated cuts were found but all of them were already in the model.
    ///
    /// The relaxation solver is not honouring constraints to within the
    /// separation tolerance.
    Stalled,

    /// The loop has not reached a terminal state yet.
    InProgress,
}

impl LoopStatus {
    /// Returns true if the relaxation satisfies every subtour constraint.
    pub fn is_converged(&self) -> bool {
        matches!(self, LoopStatus::Converged)
    }
}

/// Final state of a cutting-plane run.
#[derive(Debug, Clone)]
pub struct CuttingPlaneResult {
    /// Termination status.
    pub status: LoopStatus,

    /// Objective value of the last relaxation (a lower bound on the tour length).
    pub objective: f64,

    /// Last relaxation as a flat `n × n` matrix, lower triangle filled.
    pub x: Vec<f64>,

    /// Separation rounds that added constraints.
    pub rounds: u64,

    /// Subtour constraints added in total.
    pub cuts_added: u64,

    /// The last relaxation read as a Hamiltonian tour, when it is one.
    pub tour: Option<Vec<usize>>,

    /// Total solve time in milliseconds.
    pub solve_time_ms: u64,
}

impl CuttingPlaneResult {
    /// True if the final relaxation is an integral tour, hence optimal.
    pub fn is_optimal_tour(&self) -> bool {
        self.status.is_converged() && self.tour.is_some()
    }
}
