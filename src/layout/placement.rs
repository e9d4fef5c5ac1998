use kurbo::{Point, Size};

use crate::foundation::core::Viewport;

/// Initial placement for a measured composite.
///
/// The top edge is `floor(viewport_height x offset_top_ratio)`, then
/// pulled up by any protrusion past the viewport's bottom edge, but never
/// above 0. The horizontal start is always the viewport's right edge
/// (off-screen).
pub fn place(viewport: Viewport, offset_top_ratio: f64, size: Size) -> Point {
    let mut top = (viewport.height_f64() * offset_top_ratio).floor();
    let protrusion = top + size.height - viewport.height_f64();
    if protrusion > 0.0 {
        top = (top - protrusion).max(0.0);
    }
    Point::new(viewport.width_f64(), top)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
