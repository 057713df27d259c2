//! Immutable distance matrix defining the tour objective.

use crate::error::{TspError, TspResult};

/// Smallest instance with meaningful tour and cut structure.
pub const MIN_CITIES: usize = 4;

/// Square matrix of non-negative distances, flattened row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Wrap a flat row-major `n × n` matrix.
    ///
    /// Rejects `n <= 3`, wrong lengths, and negative or non-finite entries.
    /// Asymmetric input is accepted with a warning; only the lower triangle
    /// enters the objective.
    pub fn from_flat(n: usize, data: Vec<f64>) -> TspResult<Self> {
        if n < MIN_CITIES {
            return Err(TspError::DegenerateInstance(n));
        }
        if data.len() != n * n {
            return Err(TspError::InvalidDistances(format!(
                "expected {} entries for {} cities, got {}",
                n * n,
                n,
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(TspError::InvalidDistances(format!(
                "entry ({}, {}) = {} is not a finite non-negative distance",
                pos / n,
                pos % n,
                data[pos]
            )));
        }

        let m = Self { n, data };
        if !m.is_symmetric(1e-9) {
            log::warn!("distance matrix is not symmetric, using its lower triangle");
        }
        Ok(m)
    }

    /// Euclidean distances between 2-D points.
    pub fn euclidean(points: &[(f64, f64)]) -> TspResult<Self> {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate() {
                data[i * n + j] = ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt();
            }
        }
        Self::from_flat(n, data)
    }

    /// Number of cities.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Distance from `i` to `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Cost of the undirected edge `{i, j}` as used by the objective.
    #[inline]
    pub fn edge_cost(&self, i: usize, j: usize) -> f64 {
        let (hi, lo) = if i > j { (i, j) } else { (j, i) };
        self.get(hi, lo)
    }

    /// Flat row-major entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// True if `|d(i,j) - d(j,i)| <= tol` for all pairs.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.n).all(|i| (0..i).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol))
    }

    /// Length of the closed tour visiting `order`.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        order
            .iter()
            .zip(order.iter().cycle().skip(1))
            .map(|(&a, &b)| self.edge_cost(a, b))
            .sum()
    }

    /// Objective value of a flat `n × n` edge solution.
    pub fn solution_cost(&self, values: &[f64]) -> f64 {
        let n = self.n;
        (0..n)
            .flat_map(|i| (0..i).map(move |j| (i, j)))
            .map(|(i, j)| self.get(i, j) * values[i * n + j])
            .sum()
    }
}
