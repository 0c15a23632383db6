//! Closed tour over a set of points.

use serde::Serialize;

use super::Point;
use crate::distance::DistanceMatrix;

/// An ordered, closed visiting sequence.
///
/// For `n` input points a tour holds `n + 1` entries: the first `n` are a
/// permutation of the input, and the last repeats the first. The visit order
/// is also kept as input indices so the tour can be scored against a
/// [`DistanceMatrix`] without searching for points.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Point;
/// use nn_tour::solve_nearest_neighbor;
///
/// let points = vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 0.0, 1.0),
/// ];
/// let tour = solve_nearest_neighbor(&points).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.order(), &[0, 1, 0]);
/// assert_eq!(tour.start(), tour.points().last().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    points: Vec<Point>,
    order: Vec<usize>,
}

impl Tour {
    /// Builds a tour from input points and a closed visit order.
    ///
    /// `order` must be non-empty, start and end with the same index, and
    /// only reference valid positions in `points`.
    pub(crate) fn from_order(points: &[Point], order: Vec<usize>) -> Self {
        debug_assert!(!order.is_empty());
        debug_assert_eq!(order.first(), order.last());
        let points = order.iter().map(|&i| points[i].clone()).collect();
        Self { points, order }
    }

    /// The points in visit order, closing point included.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Input indices in visit order, closing index included.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// The starting (and closing) point.
    pub fn start(&self) -> &Point {
        &self.points[0]
    }

    /// Number of entries, closing point included (`n + 1`).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a tour holds at least its start and closing point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of distinct cities visited (`n`).
    pub fn num_cities(&self) -> usize {
        self.points.len() - 1
    }

    /// Iterates over the points in visit order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consumes the tour, returning its points in visit order.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Total closed length, looked up in the matrix the tour was built from.
    pub fn total_distance(&self, distances: &DistanceMatrix) -> f64 {
        self.order
            .windows(2)
            .map(|leg| distances.get(leg[0], leg[1]))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
