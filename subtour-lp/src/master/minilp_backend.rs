//! Relaxation backend using the `minilp` simplex solver.
//!
//! The first solve builds a `minilp::Problem` from everything recorded so
//! far. Constraints added afterwards are applied to the previous optimal
//! solution, so each cutting-plane round re-solves from the last basis
//! instead of starting over. Creating variables or changing the objective
//! after a solve forces a rebuild.

use minilp::{ComparisonOp, OptimizationDirection, Problem, Solution, Variable};

use super::{LinearConstraint, LinearExpr, Relation, RelaxationBackend, Sense, VarHandle, VarKind};
use crate::error::{TspError, TspResult};

/// Master backend over `minilp`.
pub struct MinilpBackend {
    /// Variable bounds, indexed by handle.
    bounds: Vec<(f64, f64)>,

    /// Dense objective coefficients, indexed by handle.
    objective: Vec<f64>,

    /// Objective direction.
    sense: Sense,

    /// Every constraint ever added.
    constraints: Vec<LinearConstraint>,

    /// How many of `constraints` the current solution already contains.
    applied: usize,

    /// Solver variables of the current solution, indexed by handle.
    solver_vars: Vec<Variable>,

    /// Last optimal solution.
    solution: Option<Solution>,

    /// Structure changed since the last solve.
    needs_rebuild: bool,
}

impl Default for MinilpBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MinilpBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self {
            bounds: Vec::new(),
            objective: Vec::new(),
            sense: Sense::Minimize,
            constraints: Vec::new(),
            applied: 0,
            solver_vars: Vec::new(),
            solution: None,
            needs_rebuild: true,
        }
    }

    /// Build a fresh problem with all variables and constraints and solve it.
    fn rebuild(&mut self) -> TspResult<Solution> {
        let direction = match self.sense {
            Sense::Minimize => OptimizationDirection::Minimize,
            Sense::Maximize => OptimizationDirection::Maximize,
        };
        let mut problem = Problem::new(direction);

        let vars: Vec<Variable> = self
            .bounds
            .iter()
            .zip(&self.objective)
            .map(|(&bounds, &coef)| problem.add_var(coef, bounds))
            .collect();

        for c in &self.constraints {
            problem.add_constraint(to_minilp_expr(&c.expr, &vars), to_op(c.relation), c.rhs);
        }

        log::debug!(
            "minilp: building relaxation with {} vars, {} constraints",
            vars.len(),
            self.constraints.len()
        );
        self.solver_vars = vars;
        problem.solve().map_err(map_solve_error)
    }

    fn check_handle(&self, var: VarHandle) -> TspResult<()> {
        if var.0 < self.bounds.len() {
            Ok(())
        } else {
            Err(TspError::UnknownVariable(var.0))
        }
    }
}

impl RelaxationBackend for MinilpBackend {
    fn create_variable(&mut self, lb: f64, ub: f64, kind: VarKind) -> TspResult<VarHandle> {
        if kind != VarKind::Continuous {
            return Err(TspError::UnsupportedVariableKind(format!(
                "{:?} (minilp solves continuous relaxations only)",
                kind
            )));
        }
        let handle = VarHandle(self.bounds.len());
        self.bounds.push((lb, ub));
        self.objective.push(0.0);
        self.needs_rebuild = true;
        Ok(handle)
    }

    fn set_objective(&mut self, sense: Sense, expr: &LinearExpr) -> TspResult<()> {
        let mut objective = vec![0.0; self.bounds.len()];
        for (var, coef) in expr.compacted() {
            self.check_handle(var)?;
            objective[var.0] = coef;
        }
        self.objective = objective;
        self.sense = sense;
        self.needs_rebuild = true;
        Ok(())
    }

    fn add_constraint(&mut self, expr: LinearExpr, relation: Relation, rhs: f64) -> TspResult<()> {
        for &(var, _) in expr.terms() {
            self.check_handle(var)?;
        }
        self.constraints.push(LinearConstraint { expr, relation, rhs });
        Ok(())
    }

    fn solve(&mut self) -> TspResult<()> {
        let previous = if self.needs_rebuild {
            None
        } else {
            self.solution.take()
        };

        let result = match previous {
            Some(mut solution) => {
                // Warm start: append the new rows to the last optimal basis.
                for c in &self.constraints[self.applied..] {
                    solution = solution
                        .add_constraint(
                            to_minilp_expr(&c.expr, &self.solver_vars),
                            to_op(c.relation),
                            c.rhs,
                        )
                        .map_err(map_solve_error)?;
                }
                Ok(solution)
            }
            None => self.rebuild(),
        };

        match result {
            Ok(solution) => {
                self.solution = Some(solution);
                self.applied = self.constraints.len();
                self.needs_rebuild = false;
                Ok(())
            }
            Err(e) => {
                self.solution = None;
                self.needs_rebuild = true;
                Err(e)
            }
        }
    }

    fn values(&self, vars: &[VarHandle]) -> TspResult<Vec<f64>> {
        let solution = self.solution.as_ref().ok_or(TspError::NotSolved)?;
        vars.iter()
            .map(|&var| {
                let v = self
                    .solver_vars
                    .get(var.0)
                    .ok_or(TspError::UnknownVariable(var.0))?;
                Ok(solution[*v])
            })
            .collect()
    }

    fn objective_value(&self) -> TspResult<f64> {
        self.solution
            .as_ref()
            .map(|s| s.objective())
            .ok_or(TspError::NotSolved)
    }

    fn num_vars(&self) -> usize {
        self.bounds.len()
    }

    fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

fn to_minilp_expr(expr: &LinearExpr, vars: &[Variable]) -> minilp::LinearExpr {
    let mut out = minilp::LinearExpr::empty();
    for (var, coef) in expr.compacted() {
        out.add(vars[var.0], coef);
    }
    out
}

fn to_op(relation: Relation) -> ComparisonOp {
    match relation {
        Relation::Eq => ComparisonOp::Eq,
        Relation::Le => ComparisonOp::Le,
        Relation::Ge => ComparisonOp::Ge,
    }
}

fn map_solve_error(e: minilp::Error) -> TspError {
    TspError::InfeasibleOrUnbounded(e.to_string())
}
