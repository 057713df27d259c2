//! Constraint pool for the cutting-plane loop.
//!
//! Records every subtour constraint handed to the relaxation, including:
//! - Constraint storage and indexing
//! - Partition-level duplicate detection
//! - Per-round statistics
//!
//! The pool only grows: constraints handed to the backend stay there.

use std::collections::HashSet;

use super::synth::SubtourConstraint;

/// A constraint with pool metadata.
#[derive(Debug, Clone)]
pub struct PooledCut {
    /// The underlying constraint.
    pub constraint: SubtourConstraint,

    /// Unique ID in the pool.
    pub id: usize,

    /// Separation round in which the constraint was added.
    pub added_round: u64,

    /// Violation `2 - lhs` at the moment it was added.
    pub violation: f64,
}

/// Cut pool settings.
#[derive(Debug, Clone)]
pub struct CutPoolSettings {
    /// Reject constraints whose partition is already present.
    pub dedup: bool,
}

impl Default for CutPoolSettings {
    fn default() -> Self {
        Self { dedup: true }
    }
}

/// Statistics for the cut pool.
#[derive(Debug, Default, Clone)]
pub struct CutPoolStats {
    /// Total constraints accepted.
    pub total_added: usize,

    /// Constraints rejected as duplicates.
    pub duplicates_rejected: usize,

    /// Largest number accepted in a single round.
    pub peak_round_size: usize,

    /// Total crossing pairs over all accepted constraints.
    pub total_terms: usize,
}

/// Monotone pool of subtour constraints.
pub struct CutPool {
    /// All accepted constraints.
    cuts: Vec<PooledCut>,

    /// Canonical partitions already present.
    partitions: HashSet<Vec<bool>>,

    /// Round currently being filled.
    round: u64,

    /// Accepted in the current round.
    round_size: usize,

    /// Settings.
    settings: CutPoolSettings,

    /// Statistics.
    stats: CutPoolStats,
}

impl CutPool {
    /// Create a new cut pool.
    pub fn new(settings: CutPoolSettings) -> Self {
        Self {
            cuts: Vec::new(),
            partitions: HashSet::new(),
            round: 0,
            round_size: 0,
            settings,
            stats: CutPoolStats::default(),
        }
    }

    /// Start a new separation round.
    pub fn begin_round(&mut self, round: u64) {
        self.round = round;
        self.round_size = 0;
    }

    /// Add a constraint to the pool.
    ///
    /// Returns the cut ID and whether it's a duplicate. A duplicate is not
    /// stored again and its ID is the one of the earlier copy.
    pub fn add(&mut self, constraint: SubtourConstraint, violation: f64) -> (usize, bool) {
        if self.settings.dedup && self.partitions.contains(&constraint.partition) {
            self.stats.duplicates_rejected += 1;
            let id = self
                .cuts
                .iter()
                .find(|c| c.constraint.partition == constraint.partition)
                .map(|c| c.id)
                .unwrap_or(usize::MAX);
            return (id, true);
        }

        let id = self.cuts.len();
        self.partitions.insert(constraint.partition.clone());
        self.stats.total_added += 1;
        self.stats.total_terms += constraint.len();
        self.round_size += 1;
        self.stats.peak_round_size = self.stats.peak_round_size.max(self.round_size);

        self.cuts.push(PooledCut {
            constraint,
            id,
            added_round: self.round,
            violation,
        });

        (id, false)
    }

    /// Get a cut by ID.
    pub fn get(&self, id: usize) -> Option<&PooledCut> {
        self.cuts.get(id)
    }

    /// Cuts accepted in `round`.
    pub fn cuts_in_round(&self, round: u64) -> impl Iterator<Item = &PooledCut> {
        self.cuts.iter().filter(move |c| c.added_round == round)
    }

    /// Largest violation among pooled cuts on a flat `n × n` solution.
    pub fn max_violation(&self, values: &[f64], n: usize) -> f64 {
        self.cuts
            .iter()
            .map(|c| c.constraint.violation(values, n))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Get pool statistics.
    pub fn stats(&self) -> &CutPoolStats {
        &self.stats
    }

    /// Number of cuts in pool.
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    /// Check if pool is empty.
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }
}
