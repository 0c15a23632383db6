//! Pairwise distances between points.
//!
//! Provides a dense planar distance matrix used by the tour builder.

mod matrix;

pub use matrix::DistanceMatrix;
