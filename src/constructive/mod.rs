//! Constructive heuristics for building tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor tour over a precomputed matrix, O(n²)
//! - [`solve_nearest_neighbor`] — Validates points, builds the matrix, then runs the above

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_tour, solve_nearest_neighbor};
