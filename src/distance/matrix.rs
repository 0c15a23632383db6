//! Dense distance matrix.

use crate::error::Result;
use crate::models::{validate_points, Point};

/// A dense n×n distance matrix stored in row-major order.
///
/// Entries are planar Euclidean distances between point coordinates. Each
/// ordered pair is computed on its own; the diagonal is never written and
/// stays at zero.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Point;
/// use nn_tour::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 3.0, 4.0),
///     Point::new("C", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.get(2, 2), 0.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the matrix from point coordinates.
    ///
    /// An empty slice yields a 0×0 matrix. Coordinates are not validated;
    /// use [`try_from_points`](Self::try_from_points) to reject NaN or
    /// infinite values up front.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate() {
                if i != j {
                    dm.set(i, j, a.distance_to(b));
                }
            }
        }
        log::debug!("built {n}x{n} distance matrix");
        dm
    }

    /// Like [`from_points`](Self::from_points), but fails with
    /// [`TourError::InvalidCoordinate`](crate::TourError::InvalidCoordinate)
    /// if any point has a non-finite coordinate.
    pub fn try_from_points(points: &[Point]) -> Result<Self> {
        validate_points(points)?;
        Ok(Self::from_points(points))
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size` or any
    /// entry is NaN or infinite.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size || data.iter().any(|d| !d.is_finite()) {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` for a 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Row `from` as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// First `(from, to)` entry that is NaN or infinite, in row-major order.
    pub fn find_non_finite(&self) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|d| !d.is_finite())
            .map(|k| (k / self.size, k % self.size))
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from`, as
    /// `(position in candidates, location index)`.
    ///
    /// Ties go to the candidate that appears first. Returns `None` only if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<(usize, usize)> {
        let (&first, rest) = candidates.split_first()?;
        Some(self.nearest_of(from, first, rest))
    }

    /// Total selection over a non-empty candidate list given as `first` plus
    /// `rest`. A later candidate only wins if it is strictly closer.
    pub(crate) fn nearest_of(&self, from: usize, first: usize, rest: &[usize]) -> (usize, usize) {
        let row = self.row(from);
        let mut best = (0, first);
        let mut best_dist = row[first];
        for (offset, &candidate) in rest.iter().enumerate() {
            let d = row[candidate];
            if d < best_dist {
                best = (offset + 1, candidate);
                best_dist = d;
            }
        }
        best
    }
}
