//! Domain model types for tour construction.
//!
//! Provides named geographic points and the closed tour built over them.

mod point;
mod tour;

pub use point::{validate_points, Point};
pub use tour::Tour;
