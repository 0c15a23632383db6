//! Nearest-neighbor constructive heuristic.
//!
//! Builds a closed tour greedily: starting from the first input point,
//! always step to the nearest unvisited point, then return to the start.
//!
//! # Complexity
//!
//! O(n²) time, O(n) extra space. The unvisited set holds input indices, so
//! each step is a single scan of the matrix row for the current city.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::models::{validate_points, Point, Tour};

/// Constructs a closed tour with the nearest-neighbor heuristic.
///
/// The tour starts at `points[0]`. At each step the nearest unvisited point
/// (by `distances`) is appended; among equidistant candidates the one that
/// comes first in input order wins. The start is appended again at the end.
///
/// # Arguments
///
/// * `points` — Locations to visit (index 0 = start)
/// * `distances` — Distance matrix over `points`
///
/// # Errors
///
/// * [`TourError::EmptyInput`] if `points` is empty
/// * [`TourError::InvalidCoordinate`] if any coordinate is NaN or infinite
/// * [`TourError::DimensionMismatch`] if the matrix size differs from
///   `points.len()`
/// * [`TourError::InvalidDistance`] if any matrix entry is NaN or infinite
///
/// # Examples
///
/// ```
/// use nn_tour::models::Point;
/// use nn_tour::distance::DistanceMatrix;
/// use nn_tour::constructive::nearest_neighbor_tour;
///
/// let points = vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("D", 0.0, 10.0),
///     Point::new("B", 0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let tour = nearest_neighbor_tour(&points, &dm).unwrap();
/// assert_eq!(tour.order(), &[0, 2, 1, 0]);
/// ```
pub fn nearest_neighbor_tour(points: &[Point], distances: &DistanceMatrix) -> Result<Tour> {
    let n = points.len();
    if n == 0 {
        return Err(TourError::EmptyInput);
    }
    validate_points(points)?;
    if distances.size() != n {
        return Err(TourError::DimensionMismatch {
            points: n,
            matrix: distances.size(),
        });
    }
    if let Some((from, to)) = distances.find_non_finite() {
        return Err(TourError::InvalidDistance { from, to });
    }

    let start = 0;
    let mut unvisited: Vec<usize> = (1..n).collect();
    let mut order = Vec::with_capacity(n + 1);
    order.push(start);
    let mut current = start;

    while let Some((&first, rest)) = unvisited.split_first() {
        let (pos, next) = distances.nearest_of(current, first, rest);
        // `remove` keeps the remaining candidates in input order.
        unvisited.remove(pos);
        order.push(next);
        current = next;
    }

    order.push(start);

    let tour = Tour::from_order(points, order);
    debug!(
        "nearest-neighbor tour over {n} points, length {:.6}",
        tour.total_distance(distances)
    );
    Ok(tour)
}

/// Builds the distance matrix for `points` and runs
/// [`nearest_neighbor_tour`].
///
/// # Errors
///
/// * [`TourError::EmptyInput`] if `points` is empty
/// * [`TourError::InvalidCoordinate`] if any coordinate is NaN or infinite
///
/// # Examples
///
/// ```
/// use nn_tour::models::Point;
/// use nn_tour::{solve_nearest_neighbor, TourError};
///
/// let points = vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 0.0, 1.0),
///     Point::new("C", 0.0, 3.0),
///     Point::new("D", 0.0, 10.0),
/// ];
/// let tour = solve_nearest_neighbor(&points).unwrap();
/// let names: Vec<&str> = tour.iter().map(|p| p.name()).collect();
/// assert_eq!(names, ["A", "B", "C", "D", "A"]);
///
/// assert!(matches!(solve_nearest_neighbor(&[]), Err(TourError::EmptyInput)));
/// ```
pub fn solve_nearest_neighbor(points: &[Point]) -> Result<Tour> {
    let distances = DistanceMatrix::from_points(points);
    nearest_neighbor_tour(points, &distances)
}
