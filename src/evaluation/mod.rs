//! Tour scoring.

mod evaluator;

pub use evaluator::{Leg, TourEvaluator, TourSummary};
