//! Vertex bipartitions and their weights.

/// Right-hand side of a subtour elimination constraint: every non-trivial
/// cut of a tour is crossed by at least two edges.
pub const SUBTOUR_RHS: f64 = 2.0;

/// A bipartition of the cities with the weight of the edges crossing it.
///
/// Both sides are sorted and non-empty; together they cover `0..n`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
    /// Vertices on one side.
    pub left: Vec<usize>,
    /// Vertices on the other side.
    pub right: Vec<usize>,
    /// Total weight of crossing edges.
    pub weight: f64,
}

impl Cut {
    /// Build a cut from a side mask: `side[v] == true` puts `v` on the left.
    pub fn from_mask(side: &[bool], weight: f64) -> Self {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (v, &s) in side.iter().enumerate() {
            if s {
                left.push(v);
            } else {
                right.push(v);
            }
        }
        Self { left, right, weight }
    }

    /// Number of vertices covered.
    pub fn num_vertices(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// True when neither side is empty.
    pub fn is_proper(&self) -> bool {
        !self.left.is_empty() && !self.right.is_empty()
    }

    /// Side mask with vertex 0 on the `false` side.
    ///
    /// Two cuts describe the same partition iff their canonical masks match.
    pub fn canonical_mask(&self) -> Vec<bool> {
        let n = self.num_vertices();
        let mut mask = vec![false; n];
        for &v in &self.left {
            mask[v] = true;
        }
        if mask.first().copied().unwrap_or(false) {
            for m in &mut mask {
                *m = !*m;
            }
        }
        mask
    }

    /// True if both cuts split the vertices the same way.
    pub fn same_partition(&self, other: &Cut) -> bool {
        self.num_vertices() == other.num_vertices()
            && self.canonical_mask() == other.canonical_mask()
    }

    /// Whether the subtour elimination constraint of this cut is violated.
    ///
    /// A cut of weight at least `2 - tol` is consistent with a tour.
    pub fn is_violated(&self, tol: f64) -> bool {
        self.weight < SUBTOUR_RHS - tol
    }

    /// Every city pair with one endpoint on each side, as `(hi, lo)`.
    ///
    /// Each unordered pair appears exactly once.
    pub fn crossing_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.left.iter().flat_map(move |&a| {
            self.right
                .iter()
                .map(move |&b| if a > b { (a, b) } else { (b, a) })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mask() {
        let cut = Cut::from_mask(&[true, false, true, false], 1.5);
        assert_eq!(cut.left, vec![0, 2]);
        assert_eq!(cut.right, vec![1, 3]);
        assert!(cut.is_proper());
        assert_eq!(cut.num_vertices(), 4);
    }

    #[test]
    fn test_same_partition_up_to_complement() {
        let a = Cut::from_mask(&[true, true, false, false], 0.0);
        let b = Cut::from_mask(&[false, false, true, true], 0.0);
        let c = Cut::from_mask(&[true, false, true, false], 0.0);
        assert!(a.same_partition(&b));
        assert!(!a.same_partition(&c));
    }

    #[test]
    fn test_violation_threshold() {
        let tol = 1e-5;
        assert!(Cut::from_mask(&[true, false], 0.0).is_violated(tol));
        assert!(Cut::from_mask(&[true, false], 1.9).is_violated(tol));
        assert!(!Cut::from_mask(&[true, false], 2.0 - 1e-7).is_violated(tol));
        assert!(!Cut::from_mask(&[true, false], 2.0).is_violated(tol));
    }

    #[test]
    fn test_crossing_pairs() {
        let cut = Cut::from_mask(&[true, false, false, true], 0.0);
        let mut pairs: Vec<_> = cut.crossing_pairs().collect();
        pairs.sort();
        assert_eq!(pairs, vec![(1, 0), (2, 0), (3, 1), (3, 2)]);
        assert!(pairs.iter().all(|&(hi, lo)| hi > lo));
    }
}
