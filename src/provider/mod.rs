//! Location providers that supply the points a tour is built over.
//!
//! - [`RandomLocationProvider`] — Seeded uniform points inside a lat/lon box
//! - [`PayloadLocationProvider`] — Records parsed from a JSON user payload

mod payload;
mod random;

pub use payload::{PayloadLocationProvider, Postcode};
pub use random::{BoundingBox, RandomLocationProvider};

use crate::error::Result;
use crate::models::Point;

/// A source of input points.
///
/// Implementations return exactly `count` points or fail; transport and
/// retry policy are theirs to decide.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Point;
/// use nn_tour::provider::LocationProvider;
/// use nn_tour::Result;
///
/// struct Fixed(Vec<Point>);
///
/// impl LocationProvider for Fixed {
///     fn fetch_locations(&self, count: usize) -> Result<Vec<Point>> {
///         Ok(self.0.iter().take(count).cloned().collect())
///     }
/// }
///
/// let p = Fixed(vec![Point::new("A", 0.0, 0.0), Point::new("B", 1.0, 1.0)]);
/// assert_eq!(p.fetch_locations(1).unwrap().len(), 1);
/// ```
pub trait LocationProvider {
    /// Returns `count` points.
    fn fetch_locations(&self, count: usize) -> Result<Vec<Point>>;
}
