//! Seeded random location provider.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::LocationProvider;
use crate::error::{Result, TourError};
use crate::models::Point;

/// An inclusive latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingBox {
    /// Creates a bounding box.
    ///
    /// Returns `None` if a latitude falls outside [-90, 90], a longitude
    /// outside [-180, 180], or a minimum exceeds its maximum. NaN bounds fail
    /// the range checks.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Option<Self> {
        let lat_ok = |v: f64| (-90.0..=90.0).contains(&v);
        let lon_ok = |v: f64| (-180.0..=180.0).contains(&v);
        if !(lat_ok(min_lat) && lat_ok(max_lat) && lon_ok(min_lon) && lon_ok(max_lon))
            || min_lat > max_lat
            || min_lon > max_lon
        {
            return None;
        }
        Some(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    /// The whole globe: lat [-90, 90], lon [-180, 180].
    pub fn world() -> Self {
        Self {
            min_lat: -90.0,
            max_lat: 90.0,
            min_lon: -180.0,
            max_lon: 180.0,
        }
    }

    /// Returns `true` if the point lies inside this box.
    pub fn contains(&self, point: &Point) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat())
            && (self.min_lon..=self.max_lon).contains(&point.lon())
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::world()
    }
}

/// Generates uniformly distributed points named `Location 1..=count`.
///
/// The same seed and box always yield the same points.
///
/// # Examples
///
/// ```
/// use nn_tour::provider::{LocationProvider, RandomLocationProvider};
///
/// let provider = RandomLocationProvider::new(42);
/// let a = provider.fetch_locations(5).unwrap();
/// let b = provider.fetch_locations(5).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a[0].name(), "Location 1");
/// ```
#[derive(Debug, Clone)]
pub struct RandomLocationProvider {
    seed: u64,
    bounds: BoundingBox,
}

impl RandomLocationProvider {
    /// Creates a provider over the whole globe.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            bounds: BoundingBox::world(),
        }
    }

    /// Restricts generated points to `bounds`.
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }

    /// The configured seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The configured bounding box.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }
}

impl LocationProvider for RandomLocationProvider {
    fn fetch_locations(&self, count: usize) -> Result<Vec<Point>> {
        if count == 0 {
            return Err(TourError::EmptyInput);
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        let b = &self.bounds;
        let points: Vec<Point> = (1..=count)
            .map(|i| {
                let lat = rng.random_range(b.min_lat..=b.max_lat);
                let lon = rng.random_range(b.min_lon..=b.max_lon);
                Point::new(format!("Location {i}"), lat, lon)
            })
            .collect();
        info!("generated {count} random locations (seed={})", self.seed);
        Ok(points)
    }
}
