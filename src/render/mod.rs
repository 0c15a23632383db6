//! Map renderers that persist a visual artifact for a point sequence.

mod html;

pub use html::HtmlMapRenderer;

use crate::error::Result;
use crate::models::Point;

/// Produces a persisted visualization of points, in the order given.
pub trait MapRenderer {
    /// Renders `points` (typically a tour's points in visit order).
    fn render(&self, points: &[Point]) -> Result<()>;
}
