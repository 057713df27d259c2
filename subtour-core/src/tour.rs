//! Reading an integral solution as a cycle.

use crate::error::{GraphError, GraphResult};
use crate::graph::flat_index;

/// True if every lower-triangle value is within `tol` of 0 or 1.
pub fn is_integral(values: &[f64], n: usize, tol: f64) -> GraphResult<bool> {
    check_len(values, n)?;
    Ok((0..n).all(|i| {
        (0..i).all(|j| {
            let v = values[i * n + j];
            v.abs() <= tol || (v - 1.0).abs() <= tol
        })
    }))
}

fn check_len(values: &[f64], n: usize) -> GraphResult<()> {
    if values.is_empty() {
        return Err(GraphError::EmptySolution);
    }
    if values.len() != n * n {
        return Err(GraphError::DimensionMismatch {
            len: values.len(),
            expected: n * n,
            n,
        });
    }
    Ok(())
}

/// Follow the edges at value `>= 1 - tol` starting from city 0.
///
/// At each city the walk leaves along the first selected edge other than
/// the one it arrived by, and stops on returning to a visited city. The
/// result is the subtour through city 0 in visiting order; it is a tour
/// of all cities iff its length is `n`.
///
/// A city with no usable edge means the solution is not a union of cycles,
/// which is reported as [`GraphError::NoNeighbor`].
pub fn trace_tour(values: &[f64], n: usize, tol: f64) -> GraphResult<Vec<usize>> {
    check_len(values, n)?;

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut last: Option<usize> = None;
    let mut current = 0;

    while n > 0 && !visited[current] {
        visited[current] = true;
        tour.push(current);

        let next = (0..n).find(|&j| {
            j != current && Some(j) != last && values[flat_index(current, j, n)] >= 1.0 - tol
        });
        let Some(j) = next else {
            return Err(GraphError::NoNeighbor { city: current });
        };

        last = Some(current);
        current = j;
    }

    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(n: usize, edges: &[(usize, usize)]) -> Vec<f64> {
        let mut x = vec![0.0; n * n];
        for &(a, b) in edges {
            x[flat_index(a, b, n)] = 1.0;
        }
        x
    }

    #[test]
    fn test_full_tour() {
        let x = solution(5, &[(0, 2), (2, 4), (4, 1), (1, 3), (3, 0)]);
        let tour = trace_tour(&x, 5, 1e-5).unwrap();
        assert_eq!(tour, vec![0, 2, 4, 1, 3]);
        assert!(is_integral(&x, 5, 1e-5).unwrap());
    }

    #[test]
    fn test_subtour_through_zero() {
        let x = solution(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let tour = trace_tour(&x, 6, 1e-5).unwrap();
        assert_eq!(tour, vec![0, 1, 2]);
    }

    #[test]
    fn test_dangling_city() {
        let x = solution(4, &[(0, 1), (1, 2)]);
        let err = trace_tour(&x, 4, 1e-5).unwrap_err();
        assert_eq!(err, GraphError::NoNeighbor { city: 2 });
    }

    #[test]
    fn test_fractional_is_not_integral() {
        let mut x = solution(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        x[flat_index(2, 0, 4)] = 0.5;
        assert!(!is_integral(&x, 4, 1e-5).unwrap());
        // Near-integral noise is tolerated.
        x[flat_index(2, 0, 4)] = 2e-6;
        assert!(is_integral(&x, 4, 1e-5).unwrap());
    }

    #[test]
    fn test_is_integral_rejects_short_slice() {
        let x = solution(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let err = is_integral(&x[..10], 4, 1e-5).unwrap_err();
        assert_eq!(
            err,
            GraphError::DimensionMismatch {
                len: 10,
                expected: 16,
                n: 4
            }
        );
        assert_eq!(is_integral(&[], 4, 1e-5), Err(GraphError::EmptySolution));
    }
}
