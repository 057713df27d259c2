//! Cutting-plane refinement loop.
//!
//! ```text
//! INITIAL --first call--> ITERATING --no violated cut--> CONVERGED
//!                            |   ^                          |
//!                            +---+ add cuts, re-solve       +--> (re-checks, stays)
//!                            |
//!                            +--round/time limit or stall--> STOPPED
//! ```
//!
//! The first call only hands out the priming solution. Every later call
//! separates the current relaxation, adds the violated subtour constraints
//! and re-solves exactly once.

use std::time::Instant;

use subtour_core::{is_integral, trace_tour, SolutionGraph};

use crate::cuts::{synthesize, CutPool, CutPoolSettings, SubtourConstraint};
use crate::error::{TspError, TspResult};
use crate::master::{LinearExpr, Relation, RelaxationBackend, Sense, VarKind};
use crate::model::{CuttingPlaneResult, DistanceMatrix, EdgeIndex, EdgeVars, LoopStatus};
use crate::settings::CuttingPlaneSettings;

/// Where the loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// The priming solution has not been handed out yet.
    Initial,
    /// Separating and re-solving.
    Iterating,
    /// The last separation found nothing to add.
    Converged,
    /// An external cap ended the loop.
    Stopped(LoopStatus),
}

/// Cutting-plane solver for the subtour relaxation of the symmetric TSP.
pub struct CuttingPlaneSolver<B: RelaxationBackend> {
    /// Objective data.
    distances: DistanceMatrix,

    /// Edge variables in the backend.
    vars: EdgeVars,

    /// Relaxation solver.
    backend: B,

    /// Every constraint added so far.
    pool: CutPool,

    /// Loop state.
    state: LoopState,

    /// Rounds that added constraints.
    rounds: u64,

    /// Start time.
    start_time: Instant,

    /// Settings.
    settings: CuttingPlaneSettings,
}

impl<B: RelaxationBackend> CuttingPlaneSolver<B> {
    /// Build the degree-constrained relaxation in `backend` and solve it once.
    ///
    /// Creates one `[0, 1]` variable per city pair, the objective
    /// `min sum d(i,j) x(i,j)`, and `sum_j x(i,j) = 2` for every city.
    pub fn new(
        distances: DistanceMatrix,
        mut backend: B,
        settings: CuttingPlaneSettings,
    ) -> TspResult<Self> {
        let start_time = Instant::now();
        let n = distances.n();
        let index = EdgeIndex::new(n);

        let mut handles = Vec::with_capacity(index.num_edges());
        let mut objective = LinearExpr::new();
        for (_, hi, lo) in index.iter() {
            let var = backend.create_variable(0.0, 1.0, VarKind::Continuous)?;
            objective.add(var, distances.get(hi, lo));
            handles.push(var);
        }
        let vars = EdgeVars::new(index, handles);
        backend.set_objective(Sense::Minimize, &objective)?;

        for i in 0..n {
            let degree: LinearExpr = (0..n)
                .filter(|&j| j != i)
                .map(|j| (vars.var(i, j), 1.0))
                .collect();
            backend.add_constraint(degree, Relation::Eq, 2.0)?;
        }

        backend.solve()?;
        if settings.verbose {
            log::info!(
                "initial relaxation: {} cities, {} edge variables, objective {:.6}",
                n,
                vars.len(),
                backend.objective_value()?
            );
        }

        Ok(Self {
            distances,
            vars,
            backend,
            pool: CutPool::new(CutPoolSettings {
                dedup: settings.dedup_cuts,
            }),
            state: LoopState::Initial,
            rounds: 0,
            start_time,
            settings,
        })
    }

    /// Build from a flat row-major distance matrix.
    pub fn from_flat(
        n: usize,
        distances: Vec<f64>,
        backend: B,
        settings: CuttingPlaneSettings,
    ) -> TspResult<Self> {
        Self::new(DistanceMatrix::from_flat(n, distances)?, backend, settings)
    }

    /// Advance the loop by one step.
    ///
    /// Returns the current relaxation as a flat `n × n` matrix (lower
    /// triangle filled), or `None` once separation finds nothing to add or
    /// a limit stopped the loop. After convergence every further call
    /// returns `None` as long as the model is unchanged.
    pub fn next_relaxation(&mut self) -> TspResult<Option<Vec<f64>>> {
        match self.state {
            LoopState::Initial => {
                self.state = LoopState::Iterating;
                return self.current_solution().map(Some);
            }
            LoopState::Stopped(_) => return Ok(None),
            LoopState::Iterating | LoopState::Converged => {}
        }

        if let Some(status) = self.limit_reached() {
            log::info!("stopping after {} rounds: {:?}", self.rounds, status);
            self.state = LoopState::Stopped(status);
            return Ok(None);
        }

        let n = self.distances.n();
        let x = self.current_solution()?;
        let found = self.separate(&x)?;

        if found.is_empty() {
            if self.state != LoopState::Converged && self.settings.verbose {
                log::info!(
                    "converged after {} rounds, {} constraints, objective {:.6}",
                    self.rounds,
                    self.pool.len(),
                    self.backend.objective_value()?
                );
            }
            self.state = LoopState::Converged;
            return Ok(None);
        }

        let round = self.rounds + 1;
        self.pool.begin_round(round);
        let mut added = 0;
        for constraint in found {
            let violation = constraint.violation(&x, n);
            let expr = constraint.to_expr(&self.vars);
            let (_, duplicate) = self.pool.add(constraint, violation);
            if duplicate {
                log::debug!("skipping constraint already in the model");
                continue;
            }
            self.backend.add_constraint(expr, Relation::Ge, 2.0)?;
            added += 1;
        }

        if added == 0 {
            log::warn!(
                "violated subtour constraints are already in the model; \
                 relaxation solver tolerance looser than {:e}",
                self.settings.tol
            );
            self.state = LoopState::Stopped(LoopStatus::Stalled);
            return Ok(None);
        }

        self.backend.solve()?;
        self.rounds = round;
        self.state = LoopState::Iterating;

        let next = self.current_solution()?;
        if self.settings.verbose && self.rounds % self.settings.log_freq.max(1) == 0 {
            log::info!(
                "round {}: {} constraints added ({} total, max violation {:.2e}), objective {:.6}",
                self.rounds,
                added,
                self.pool.len(),
                self.pool.max_violation(&next, n).max(0.0),
                self.backend.objective_value()?
            );
        }

        Ok(Some(next))
    }

    /// Run until convergence or a limit.
    pub fn solve_to_convergence(&mut self) -> TspResult<CuttingPlaneResult> {
        while self.next_relaxation()?.is_some() {}
        self.result()
    }

    /// Snapshot of the loop outcome so far.
    pub fn result(&self) -> TspResult<CuttingPlaneResult> {
        let n = self.distances.n();
        let x = self.current_solution()?;
        let tol = self.settings.tol;

        let status = match self.state {
            LoopState::Stopped(status) => status,
            LoopState::Converged => LoopStatus::Converged,
            LoopState::Initial | LoopState::Iterating => LoopStatus::InProgress,
        };

        // A dead end on an integral point is a solver fault and propagates;
        // a closed subtour shorter than `n` is just not a tour.
        let tour = if is_integral(&x, n, tol)? {
            Some(trace_tour(&x, n, tol)?).filter(|tour| tour.len() == n)
        } else {
            None
        };

        if let Some(ref tour) = tour {
            log::debug!("integral tour of length {:.6}", self.distances.tour_length(tour));
        }

        Ok(CuttingPlaneResult {
            status,
            objective: self.backend.objective_value()?,
            x,
            rounds: self.rounds,
            cuts_added: self.pool.len() as u64,
            tour,
            solve_time_ms: self.start_time.elapsed().as_millis() as u64,
        })
    }

    /// Current relaxation as a flat `n × n` matrix.
    pub fn current_solution(&self) -> TspResult<Vec<f64>> {
        let slots = self.backend.values(self.vars.handles())?;
        if slots.len() != self.vars.len() {
            return Err(TspError::ValueCountMismatch {
                got: slots.len(),
                expected: self.vars.len(),
            });
        }
        Ok(self.vars.index().to_flat(&slots))
    }

    /// Violated subtour constraints of `x`.
    fn separate(&self, x: &[f64]) -> TspResult<Vec<SubtourConstraint>> {
        let n = self.distances.n();
        let tol = self.settings.tol;
        let graph = SolutionGraph::from_solution(x, n, tol)?;
        let strategy = self.settings.strategy.reseeded(self.rounds);
        let separation = subtour_core::separate(&graph, &strategy)?;

        log::debug!(
            "separation: {} edges, {:?}, weight {:.6}",
            graph.num_edges(),
            separation.kind,
            separation.weight
        );
        Ok(synthesize(&separation, tol))
    }

    fn limit_reached(&self) -> Option<LoopStatus> {
        if self.rounds >= self.settings.max_rounds {
            return Some(LoopStatus::RoundLimit);
        }
        if let Some(limit) = self.settings.time_limit_ms {
            if self.start_time.elapsed().as_millis() as u64 >= limit {
                return Some(LoopStatus::TimeLimit);
            }
        }
        None
    }

    /// Current loop state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Rounds that added constraints.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Constraint pool.
    pub fn pool(&self) -> &CutPool {
        &self.pool
    }

    /// Distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Edge variables.
    pub fn vars(&self) -> &EdgeVars {
        &self.vars
    }

    /// Relaxation backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
