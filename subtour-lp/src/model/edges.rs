//! Canonical indexing of undirected city pairs.
//!
//! Pair `{i, j}` with `hi = max(i, j)`, `lo = min(i, j)` lives in slot
//! `hi * (hi - 1) / 2 + lo` of a dense arena of `n * (n - 1) / 2` entries.
//! Slots enumerate the strict lower triangle row by row, so only real
//! edges ever get a variable.

use subtour_core::flat_index;

use crate::master::VarHandle;

/// Bijection between city pairs and dense slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeIndex {
    n: usize,
}

impl EdgeIndex {
    /// Index for `n` cities.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Number of cities.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.n * self.n.saturating_sub(1) / 2
    }

    /// Slot of the pair `{i, j}`; `i != j`.
    #[inline]
    pub fn slot(&self, i: usize, j: usize) -> usize {
        debug_assert!(i != j && i < self.n && j < self.n);
        let (hi, lo) = if i > j { (i, j) } else { (j, i) };
        hi * (hi - 1) / 2 + lo
    }

    /// All pairs `(slot, hi, lo)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, usize)> {
        let n = self.n;
        (1..n)
            .flat_map(|hi| (0..hi).map(move |lo| (hi, lo)))
            .enumerate()
            .map(|(slot, (hi, lo))| (slot, hi, lo))
    }

    /// Expand slot values into a flat `n × n` matrix (lower triangle filled).
    pub fn to_flat(&self, slot_values: &[f64]) -> Vec<f64> {
        let n = self.n;
        let mut flat = vec![0.0; n * n];
        for (slot, hi, lo) in self.iter() {
            flat[flat_index(hi, lo, n)] = slot_values[slot];
        }
        flat
    }
}

/// Backend variables for every edge, in slot order.
#[derive(Debug, Clone)]
pub struct EdgeVars {
    index: EdgeIndex,
    handles: Vec<VarHandle>,
}

impl EdgeVars {
    /// Wrap handles created in slot order.
    pub fn new(index: EdgeIndex, handles: Vec<VarHandle>) -> Self {
        debug_assert_eq!(handles.len(), index.num_edges());
        Self { index, handles }
    }

    /// Underlying pair index.
    pub fn index(&self) -> &EdgeIndex {
        &self.index
    }

    /// Variable of the edge `{i, j}`.
    #[inline]
    pub fn var(&self, i: usize, j: usize) -> VarHandle {
        self.handles[self.index.slot(i, j)]
    }

    /// All handles in slot order.
    pub fn handles(&self) -> &[VarHandle] {
        &self.handles
    }

    /// Number of edge variables.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// True if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_pair_bijection() {
        let idx = EdgeIndex::new(40);
        assert_eq!(idx.num_edges(), 780);
        for (slot, hi, lo) in idx.iter() {
            assert!(hi > lo);
            assert_eq!(idx.slot(hi, lo), slot);
            assert_eq!(idx.slot(lo, hi), slot);
        }
    }

    #[test]
    fn test_first_slots() {
        let idx = EdgeIndex::new(5);
        let pairs: Vec<_> = idx.iter().map(|(_, hi, lo)| (hi, lo)).take(4).collect();
        assert_eq!(pairs, vec![(1, 0), (2, 0), (2, 1), (3, 0)]);
    }

    #[test]
    fn test_to_flat_layout() {
        let idx = EdgeIndex::new(4);
        let slots: Vec<f64> = (0..idx.num_edges()).map(|s| s as f64 + 1.0).collect();
        let flat = idx.to_flat(&slots);
        assert_eq!(flat.len(), 16);
        assert_eq!(flat[1 * 4 + 0], 1.0);
        assert_eq!(flat[3 * 4 + 2], 6.0);
        // Diagonal and upper triangle stay zero.
        assert_eq!(flat[0], 0.0);
        assert_eq!(flat[0 * 4 + 1], 0.0);
    }

    #[test]
    fn test_edge_vars_lookup() {
        let idx = EdgeIndex::new(4);
        let handles: Vec<VarHandle> = (0..6).map(|k| VarHandle(100 + k)).collect();
        let vars = EdgeVars::new(idx, handles);
        assert_eq!(vars.var(2, 1), VarHandle(102));
        assert_eq!(vars.var(0, 3), VarHandle(103));
        assert_eq!(vars.len(), 6);
    }
}
