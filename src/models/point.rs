//! Named geographic point.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// A named location with latitude and longitude.
///
/// Coordinates are treated as a planar pair for distance purposes; no
/// geodesic correction is applied.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Point;
///
/// let a = Point::new("A", 0.0, 0.0);
/// let b = Point::new("B", 3.0, 4.0);
/// assert_eq!(a.name(), "A");
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    name: String,
    lat: f64,
    lon: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Point name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Planar Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

/// Checks that every point has finite coordinates.
///
/// Returns the first offending point as [`TourError::InvalidCoordinate`].
pub fn validate_points(points: &[Point]) -> Result<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => {
            let p = &points[index];
            Err(TourError::InvalidCoordinate {
                index,
                name: p.name.clone(),
                lat: p.lat,
                lon: p.lon,
            })
        }
        None => Ok(()),
    }
}
