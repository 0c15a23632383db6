//! Tour evaluator that breaks a closed tour into legs.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// A single edge of a tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    /// Input index of the departure point.
    pub from: usize,
    /// Input index of the arrival point.
    pub to: usize,
    /// Distance of this edge.
    pub distance: f64,
}

/// Per-leg breakdown and totals for a tour.
#[derive(Debug, Clone, PartialEq)]
pub struct TourSummary {
    /// Number of distinct cities visited.
    pub num_cities: usize,
    /// Sum of all leg distances, closing leg included.
    pub total_distance: f64,
    /// The longest leg, if the tour has any.
    pub longest_leg: Option<Leg>,
    /// Legs in visit order.
    pub legs: Vec<Leg>,
}

/// Scores tours against the distance matrix they were built from.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Point;
/// use nn_tour::distance::DistanceMatrix;
/// use nn_tour::constructive::nearest_neighbor_tour;
/// use nn_tour::evaluation::TourEvaluator;
///
/// let points = vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 0.0, 1.0),
///     Point::new("C", 0.0, 3.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let tour = nearest_neighbor_tour(&points, &dm).unwrap();
///
/// let summary = TourEvaluator::new(&dm).summarize(&tour);
/// assert_eq!(summary.legs.len(), 3);
/// assert!((summary.total_distance - 6.0).abs() < 1e-10);
/// ```
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator over the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Legs of the tour in visit order.
    pub fn legs(&self, tour: &Tour) -> Vec<Leg> {
        tour.order()
            .windows(2)
            .map(|w| Leg {
                from: w[0],
                to: w[1],
                distance: self.distances.get(w[0], w[1]),
            })
            .collect()
    }

    /// Computes totals and the longest leg.
    ///
    /// When several legs share the maximum length the earliest one is kept.
    pub fn summarize(&self, tour: &Tour) -> TourSummary {
        let legs = self.legs(tour);
        let total_distance = legs.iter().map(|l| l.distance).sum();
        let longest_leg = legs.iter().copied().fold(None, |best: Option<Leg>, leg| {
            match best {
                Some(b) if b.distance >= leg.distance => Some(b),
                _ => Some(leg),
            }
        });
        TourSummary {
            num_cities: tour.num_cities(),
            total_distance,
            longest_leg,
            legs,
        }
    }
}
