//! # nn-tour
//!
//! Nearest-neighbor tour construction over geographic points.
//!
//! Given a list of points, builds a planar distance matrix and greedily walks
//! to the closest unvisited point until all are visited, then returns to the
//! start. Results are deterministic: ties resolve by input order.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour)
//! - [`distance`] — Pairwise distance matrix
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`evaluation`] — Tour length and per-leg breakdown
//! - [`provider`] — Location sources (seeded random, JSON payload)
//! - [`render`] — HTML marker map output
//! - [`logging`] — stderr logger setup for the binary

pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod logging;
pub mod models;
pub mod provider;
pub mod render;

pub use constructive::{nearest_neighbor_tour, solve_nearest_neighbor};
pub use error::{Result, TourError};
