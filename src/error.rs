//! Error taxonomy shared by the tour builder and its boundary modules.

use thiserror::Error as ThisError;

/// Errors produced while building, loading, or rendering a tour.
#[derive(Debug, ThisError)]
pub enum TourError {
    /// No points were supplied, so no tour can be formed.
    #[error("cannot build a tour from zero points")]
    EmptyInput,

    /// A point carries a NaN or infinite coordinate.
    #[error("point {index} ({name}) has a non-finite coordinate: lat={lat}, lon={lon}")]
    InvalidCoordinate {
        /// Position of the point in the input sequence.
        index: usize,
        /// Point name.
        name: String,
        /// Offending latitude.
        lat: f64,
        /// Offending longitude.
        lon: f64,
    },

    /// The distance matrix does not cover the point sequence.
    #[error("distance matrix is {matrix}x{matrix} but {points} points were given")]
    DimensionMismatch {
        /// Number of points.
        points: usize,
        /// Matrix dimension.
        matrix: usize,
    },

    /// A distance matrix entry is NaN or infinite.
    #[error("distance from {from} to {to} is not finite")]
    InvalidDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
    },

    /// A provider was asked for more locations than it can supply.
    #[error("requested {requested} locations but only {available} are available")]
    InsufficientLocations {
        /// Number of locations asked for.
        requested: usize,
        /// Number of locations the source holds.
        available: usize,
    },

    /// A location payload parsed as JSON but holds unusable values.
    #[error("invalid location payload: {0}")]
    InvalidPayload(String),

    /// A location payload is not valid JSON for the expected schema.
    #[error(transparent)]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The logger could not be installed.
    #[error("logger init failed: {0}")]
    Logger(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TourError>;

impl TourError {
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload(message.into())
    }

    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger(message.into())
    }
}
