//! Relaxation backend trait and linear-algebra value types.

use crate::error::TspResult;

/// Opaque handle to a backend variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarHandle(pub usize);

/// Domain of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Real-valued.
    Continuous,
    /// Integer-valued.
    Integer,
}

/// Objective direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// Minimize the objective.
    Minimize,
    /// Maximize the objective.
    Maximize,
}

/// Relation between a linear expression and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `expr == rhs`
    Eq,
    /// `expr <= rhs`
    Le,
    /// `expr >= rhs`
    Ge,
}

/// A sparse linear expression `sum coef_i * x_i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(VarHandle, f64)>,
}

impl LinearExpr {
    /// The zero expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `coef * var`.
    pub fn add(&mut self, var: VarHandle, coef: f64) {
        self.terms.push((var, coef));
    }

    /// Builder form of [`LinearExpr::add`].
    pub fn with(mut self, var: VarHandle, coef: f64) -> Self {
        self.add(var, coef);
        self
    }

    /// Raw terms in insertion order.
    pub fn terms(&self) -> &[(VarHandle, f64)] {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms sorted by variable with repeated variables summed and zeros dropped.
    pub fn compacted(&self) -> Vec<(VarHandle, f64)> {
        let mut terms = self.terms.clone();
        terms.sort_by_key(|&(v, _)| v);

        let mut out: Vec<(VarHandle, f64)> = Vec::with_capacity(terms.len());
        for (v, c) in terms {
            match out.last_mut() {
                Some((last, acc)) if *last == v => *acc += c,
                _ => out.push((v, c)),
            }
        }
        out.retain(|&(_, c)| c != 0.0);
        out
    }
}

impl FromIterator<(VarHandle, f64)> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = (VarHandle, f64)>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

/// A linear constraint `expr (==|<=|>=) rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    /// Left-hand side.
    pub expr: LinearExpr,
    /// Relation.
    pub relation: Relation,
    /// Right-hand side.
    pub rhs: f64,
}

/// Trait for relaxation solvers.
///
/// The cutting-plane loop only ever talks to the LP through this boundary:
/// it creates variables and the objective once, adds constraints
/// monotonically, re-solves, and reads values back. Constraints are never
/// removed.
pub trait RelaxationBackend {
    /// Create a variable with bounds `[lb, ub]`.
    fn create_variable(&mut self, lb: f64, ub: f64, kind: VarKind) -> TspResult<VarHandle>;

    /// Set the objective function.
    fn set_objective(&mut self, sense: Sense, expr: &LinearExpr) -> TspResult<()>;

    /// Add a constraint to the persistent constraint set.
    fn add_constraint(&mut self, expr: LinearExpr, relation: Relation, rhs: f64) -> TspResult<()>;

    /// Solve the current relaxation.
    ///
    /// Fails with [`TspError::InfeasibleOrUnbounded`](crate::TspError::InfeasibleOrUnbounded)
    /// when no optimal solution exists.
    fn solve(&mut self) -> TspResult<()>;

    /// Values of `vars` in the last solution.
    fn values(&self, vars: &[VarHandle]) -> TspResult<Vec<f64>>;

    /// Objective value of the last solution.
    fn objective_value(&self) -> TspResult<f64>;

    /// Number of variables created.
    fn num_vars(&self) -> usize;

    /// Number of constraints added.
    fn num_constraints(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compacted_merges_duplicates() {
        let expr = LinearExpr::new()
            .with(VarHandle(3), 1.0)
            .with(VarHandle(1), 2.0)
            .with(VarHandle(3), 0.5)
            .with(VarHandle(2), 1.0)
            .with(VarHandle(2), -1.0);
        assert_eq!(expr.len(), 5);
        assert_eq!(expr.compacted(), vec![(VarHandle(1), 2.0), (VarHandle(3), 1.5)]);
    }
}
