//! End-to-end runs of the cutting-plane loop on the minilp backend.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use subtour_core::{separate_solution, MinCutStrategy, DEFAULT_TOL};
use subtour_lp::{
    solve_relaxation, CuttingPlaneSettings, CuttingPlaneSolver, DistanceMatrix, LoopState,
    LoopStatus, MinilpBackend, RelaxationBackend, TspError,
};

/// Two unit triangles ten units apart. The degree relaxation picks both
/// triangles, so at least one subtour constraint is needed.
fn two_clusters() -> DistanceMatrix {
    DistanceMatrix::euclidean(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (0.5, 0.8),
        (10.0, 0.0),
        (11.0, 0.0),
        (10.5, 0.8),
    ])
    .unwrap()
}

fn regular_polygon(n: usize) -> DistanceMatrix {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|k| {
            let a = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
            (a.cos(), a.sin())
        })
        .collect();
    DistanceMatrix::euclidean(&points).unwrap()
}

fn uniform_square(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n).map(|_| (rng.gen(), rng.gen())).collect();
    DistanceMatrix::euclidean(&points).unwrap()
}

fn assert_no_violated_subtour(x: &[f64], n: usize) {
    let sep = separate_solution(x, n, DEFAULT_TOL, &MinCutStrategy::StoerWagner).unwrap();
    assert!(
        sep.is_tour_feasible(DEFAULT_TOL),
        "final relaxation still has a cut of weight {}",
        sep.weight
    );
}

#[test]
fn test_two_clusters_need_a_cut() {
    let d = two_clusters();
    let mut solver =
        CuttingPlaneSolver::new(d.clone(), MinilpBackend::new(), CuttingPlaneSettings::default())
            .unwrap();

    let mut objectives = Vec::new();
    let mut last = None;
    while let Some(x) = solver.next_relaxation().unwrap() {
        objectives.push(d.solution_cost(&x));
        last = Some(x);
    }

    assert_eq!(solver.state(), LoopState::Converged);
    assert!(solver.rounds() >= 1);
    assert!(!solver.pool().is_empty());

    // Adding constraints never lowers the relaxation bound.
    for w in objectives.windows(2) {
        assert!(w[1] >= w[0] - 1e-6, "objective dropped: {:?}", objectives);
    }

    // The bridge costs at least two crossings of ~9 units.
    let x = last.unwrap();
    assert_no_violated_subtour(&x, 6);
    assert!(d.solution_cost(&x) > 18.0);
}

#[test]
fn test_regular_polygon_is_integral_tour() {
    let n = 10;
    let d = regular_polygon(n);
    let result = solve_relaxation(&d, &CuttingPlaneSettings::default()).unwrap();

    assert_eq!(result.status, LoopStatus::Converged);
    assert_eq!(result.rounds, 0);
    assert!(result.is_optimal_tour());

    let tour = result.tour.unwrap();
    assert_eq!(tour, (0..n).collect::<Vec<_>>());
    assert!((d.tour_length(&tour) - result.objective).abs() < 1e-6);
}

#[test]
fn test_idempotent_after_convergence() {
    let mut solver = CuttingPlaneSolver::new(
        two_clusters(),
        MinilpBackend::new(),
        CuttingPlaneSettings::default(),
    )
    .unwrap();
    let result = solver.solve_to_convergence().unwrap();
    assert!(result.status.is_converged());

    let constraints = solver.backend().num_constraints();
    for _ in 0..3 {
        assert!(solver.next_relaxation().unwrap().is_none());
    }
    assert_eq!(solver.backend().num_constraints(), constraints);
    assert_eq!(solver.pool().len() as u64, result.cuts_added);
}

#[test]
fn test_three_cities_rejected() {
    let err = CuttingPlaneSolver::from_flat(
        3,
        vec![0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0],
        MinilpBackend::new(),
        CuttingPlaneSettings::default(),
    )
    .err()
    .unwrap();
    assert!(matches!(err, TspError::DegenerateInstance(3)));
}

#[test]
fn test_randomized_strategy_matches_stoer_wagner() {
    let d = uniform_square(12, 7);
    let exact = solve_relaxation(&d, &CuttingPlaneSettings::default()).unwrap();
    let randomized = solve_relaxation(
        &d,
        &CuttingPlaneSettings::default().with_strategy(MinCutStrategy::randomized(11, 200)),
    )
    .unwrap();

    assert!(exact.status.is_converged());
    assert!(randomized.status.is_converged());
    assert!((exact.objective - randomized.objective).abs() < 1e-6);
}

#[test]
fn test_bound_below_any_tour() {
    for seed in 0..4 {
        let n = 10 + seed as usize;
        let d = uniform_square(n, seed);
        let result = solve_relaxation(&d, &CuttingPlaneSettings::default()).unwrap();

        assert!(result.status.is_converged());
        assert_no_violated_subtour(&result.x, n);

        let identity: Vec<usize> = (0..n).collect();
        assert!(result.objective <= d.tour_length(&identity) + 1e-6);
        if let Some(tour) = &result.tour {
            assert!((d.tour_length(tour) - result.objective).abs() < 1e-6);
        }
    }
}

#[test]
fn test_round_limit_stops_early() {
    let result = solve_relaxation(
        &two_clusters(),
        &CuttingPlaneSettings::default().with_max_rounds(0),
    )
    .unwrap();
    assert_eq!(result.status, LoopStatus::RoundLimit);
    assert_eq!(result.cuts_added, 0);
}
