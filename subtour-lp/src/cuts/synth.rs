//! Constraint synthesis: bipartition to cut-set inequality.
//!
//! For a partition `(S, V \ S)` the inequality
//!
//! ```text
//! sum_{a in S, b not in S} x(a, b) >= 2
//! ```
//!
//! holds for every tour and is violated by any solution whose support
//! crosses the partition with total weight below 2.

use subtour_core::{flat_index, Cut, Separation, SUBTOUR_RHS};

use crate::master::LinearExpr;
use crate::model::EdgeVars;

/// A subtour elimination constraint over city pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtourConstraint {
    /// Crossing pairs `(hi, lo)`, each unordered pair exactly once.
    pub pairs: Vec<(usize, usize)>,

    /// Right-hand side (always 2).
    pub rhs: f64,

    /// Crossing weight of the cut that produced this constraint.
    pub cut_weight: f64,

    /// Partition mask with city 0 on the `false` side.
    pub partition: Vec<bool>,
}

impl SubtourConstraint {
    /// Cut-set constraint of `cut`, regardless of violation.
    pub fn from_cut(cut: &Cut) -> Self {
        Self {
            pairs: cut.crossing_pairs().collect(),
            rhs: SUBTOUR_RHS,
            cut_weight: cut.weight,
            partition: cut.canonical_mask(),
        }
    }

    /// Number of edge variables in the constraint.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if the constraint has no terms.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Left-hand side evaluated on a flat `n × n` solution.
    pub fn lhs(&self, values: &[f64], n: usize) -> f64 {
        self.pairs
            .iter()
            .map(|&(hi, lo)| values[flat_index(hi, lo, n)])
            .sum()
    }

    /// `rhs - lhs`; positive when violated.
    pub fn violation(&self, values: &[f64], n: usize) -> f64 {
        self.rhs - self.lhs(values, n)
    }

    /// Linear expression over the backend edge variables.
    pub fn to_expr(&self, vars: &EdgeVars) -> LinearExpr {
        self.pairs
            .iter()
            .map(|&(hi, lo)| (vars.var(hi, lo), 1.0))
            .collect()
    }
}

/// Constraint for `cut` if its weight is below `2 - tol`.
pub fn synthesize_cut(cut: &Cut, tol: f64) -> Option<SubtourConstraint> {
    if cut.is_proper() && cut.is_violated(tol) {
        Some(SubtourConstraint::from_cut(cut))
    } else {
        None
    }
}

/// Constraints for every violated cut of a separation.
///
/// An empty result means the solution satisfies all subtour constraints
/// the oracle can see.
pub fn synthesize(separation: &Separation, tol: f64) -> Vec<SubtourConstraint> {
    separation
        .cuts
        .iter()
        .filter_map(|cut| synthesize_cut(cut, tol))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::master::VarHandle;
    use crate::model::EdgeIndex;
    use std::collections::HashSet;
    use subtour_core::{separate_solution, MinCutStrategy, DEFAULT_TOL};

    #[test]
    fn test_two_two_cycles_give_two_constraints() {
        let n = 4;
        let mut x = vec![0.0; n * n];
        x[flat_index(1, 0, n)] = 1.0;
        x[flat_index(3, 2, n)] = 1.0;

        let sep = separate_solution(&x, n, DEFAULT_TOL, &MinCutStrategy::StoerWagner).unwrap();
        assert!(sep.is_disconnected());

        let constraints = synthesize(&sep, DEFAULT_TOL);
        assert_eq!(constraints.len(), 2);
        for c in &constraints {
            let mut pairs = c.pairs.clone();
            pairs.sort();
            assert_eq!(pairs, vec![(2, 0), (2, 1), (3, 0), (3, 1)]);
            assert_eq!(c.rhs, 2.0);
            assert_eq!(c.lhs(&x, n), 0.0);
            assert_eq!(c.violation(&x, n), 2.0);
        }
    }

    #[test]
    fn test_valid_cut_gives_nothing() {
        let tol = DEFAULT_TOL;
        let at_two = Cut::from_mask(&[true, true, false, false], 2.0 - tol / 2.0);
        assert!(synthesize_cut(&at_two, tol).is_none());

        let above = Cut::from_mask(&[true, false, false, false], 3.0);
        assert!(synthesize_cut(&above, tol).is_none());

        let below = Cut::from_mask(&[true, false, false, false], 1.5);
        assert!(synthesize_cut(&below, tol).is_some());

        let improper = Cut::from_mask(&[true, true, true, true], 0.0);
        assert!(synthesize_cut(&improper, tol).is_none());
    }

    #[test]
    fn test_round_trip_through_partition() {
        let cut = Cut::from_mask(&[false, true, true, false, true, false, false], 0.5);
        let c = synthesize_cut(&cut, DEFAULT_TOL).unwrap();
        assert_eq!(c.len(), 3 * 4);

        // Re-feed the stored partition.
        let again = Cut::from_mask(&c.partition, c.cut_weight);
        let c2 = synthesize_cut(&again, DEFAULT_TOL).unwrap();

        let pairs: HashSet<(usize, usize)> = c2.pairs.iter().copied().collect();
        assert_eq!(pairs.len(), c2.len(), "an edge variable appears twice");
        for &(hi, lo) in &c2.pairs {
            assert_ne!(c2.partition[hi], c2.partition[lo]);
        }
        let original: HashSet<(usize, usize)> = c.pairs.iter().copied().collect();
        assert_eq!(pairs, original);
    }

    #[test]
    fn test_to_expr_uses_edge_slots() {
        let idx = EdgeIndex::new(4);
        let vars = EdgeVars::new(idx, (0..6).map(VarHandle).collect());
        let cut = Cut::from_mask(&[true, false, false, false], 0.0);
        let expr = SubtourConstraint::from_cut(&cut).to_expr(&vars);

        let mut handles: Vec<usize> = expr.terms().iter().map(|(v, _)| v.0).collect();
        handles.sort();
        // Slots of (1,0), (2,0), (3,0).
        assert_eq!(handles, vec![0, 1, 3]);
        assert!(expr.terms().iter().all(|&(_, c)| c == 1.0));
    }
}
