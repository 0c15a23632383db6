//! Property-based tests for nn-tour.
//!
//! Uses proptest to check tour and matrix invariants across random inputs.

use nn_tour::distance::DistanceMatrix;
use nn_tour::models::Point;
use nn_tour::provider::{BoundingBox, LocationProvider, RandomLocationProvider};
use nn_tour::{nearest_neighbor_tour, solve_nearest_neighbor, TourError};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Points with small integer-ish coordinates so ties actually occur.
fn gridded_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-5i32..5, -5i32..5), 1..max).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (lat, lon))| Point::new(format!("P{i}"), lat as f64, lon as f64))
            .collect()
    })
}

fn continuous_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-90.0..90.0f64, -180.0..180.0f64), 1..max).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (lat, lon))| Point::new(format!("P{i}"), lat, lon))
            .collect()
    })
}

// ============================================================================
// Distance Matrix Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_matrix_symmetric_with_zero_diagonal(points in continuous_points(30)) {
        let dm = DistanceMatrix::from_points(&points);
        prop_assert_eq!(dm.size(), points.len());
        for i in 0..points.len() {
            prop_assert_eq!(dm.get(i, i), 0.0);
            for j in 0..points.len() {
                prop_assert_eq!(dm.get(i, j), dm.get(j, i));
                prop_assert!(dm.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn prop_matrix_matches_point_distance(points in continuous_points(15)) {
        let dm = DistanceMatrix::from_points(&points);
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate() {
                if i != j {
                    prop_assert_eq!(dm.get(i, j), a.distance_to(b));
                }
            }
        }
    }
}

// ============================================================================
// Tour Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_tour_is_closed_permutation(points in gridded_points(25)) {
        let n = points.len();
        let tour = solve_nearest_neighbor(&points).unwrap();

        prop_assert_eq!(tour.len(), n + 1);
        prop_assert_eq!(&tour.points()[0], &tour.points()[n]);
        prop_assert_eq!(tour.order()[0], 0);
        prop_assert_eq!(tour.order()[n], 0);

        let mut seen = tour.order()[..n].to_vec();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());

        for (p, &idx) in tour.points().iter().zip(tour.order()) {
            prop_assert_eq!(p, &points[idx]);
        }
    }

    #[test]
    fn prop_tour_deterministic(points in gridded_points(25)) {
        let a = solve_nearest_neighbor(&points).unwrap();
        let b = solve_nearest_neighbor(&points).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_each_step_is_nearest_and_first_on_ties(points in gridded_points(20)) {
        let dm = DistanceMatrix::from_points(&points);
        let tour = nearest_neighbor_tour(&points, &dm).unwrap();
        let order = tour.order();
        let n = points.len();

        for step in 1..n {
            let current = order[step - 1];
            let chosen = order[step];
            let mut remaining: Vec<usize> = order[step..n].to_vec();
            remaining.sort_unstable();

            let best = remaining
                .iter()
                .map(|&c| dm.get(current, c))
                .fold(f64::INFINITY, f64::min);
            let first_best = remaining
                .iter()
                .copied()
                .find(|&c| dm.get(current, c) == best)
                .unwrap();
            prop_assert_eq!(chosen, first_best);
        }
    }

    #[test]
    fn prop_random_provider_feeds_solver(seed in any::<u64>(), count in 1usize..40) {
        let bounds = BoundingBox::new(-10.0, 10.0, -10.0, 10.0).unwrap();
        let provider = RandomLocationProvider::new(seed).with_bounds(bounds);
        let points = provider.fetch_locations(count).unwrap();
        prop_assert!(points.iter().all(|p| bounds.contains(p)));
        let tour = solve_nearest_neighbor(&points).unwrap();
        prop_assert_eq!(tour.num_cities(), count);
    }
}

// ============================================================================
// Fixed Scenarios
// ============================================================================

#[test]
fn line_scenario_visits_in_distance_order() {
    let points = vec![
        Point::new("A", 0.0, 0.0),
        Point::new("B", 0.0, 1.0),
        Point::new("C", 0.0, 3.0),
        Point::new("D", 0.0, 10.0),
    ];
    let dm = DistanceMatrix::from_points(&points);
    assert_eq!(dm.get(0, 1), 1.0);
    assert_eq!(dm.get(1, 2), 2.0);
    assert_eq!(dm.get(2, 3), 7.0);
    assert_eq!(dm.get(3, 0), 10.0);

    let tour = nearest_neighbor_tour(&points, &dm).unwrap();
    let names: Vec<&str> = tour.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["A", "B", "C", "D", "A"]);
}

#[test]
fn coincident_points_resolve_by_input_order() {
    let points = vec![
        Point::new("A", 0.0, 0.0),
        Point::new("B", 0.0, 5.0),
        Point::new("C", 0.0, 5.0),
    ];
    let tour = solve_nearest_neighbor(&points).unwrap();
    let names: Vec<&str> = tour.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["A", "B", "C", "A"]);
}

#[test]
fn empty_input_is_an_error() {
    assert!(matches!(
        solve_nearest_neighbor(&[]),
        Err(TourError::EmptyInput)
    ));
    assert_eq!(DistanceMatrix::from_points(&[]).size(), 0);
}

#[test]
fn non_finite_coordinate_is_an_error() {
    let points = vec![Point::new("A", 0.0, 0.0), Point::new("B", f64::NAN, 0.0)];
    assert!(matches!(
        solve_nearest_neighbor(&points),
        Err(TourError::InvalidCoordinate { index: 1, .. })
    ));
}
