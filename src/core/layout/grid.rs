use crate::core::layout::{MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, TOP_OFFSET_MM};
use crate::types::Circle;

/// Circle count `tile_circles` yields for `diameter`, computed without tiling.
/// May differ by a row or column when the diameter divides the area only up to rounding.
pub fn grid_capacity(diameter: f64) -> f64 {
    let columns = ((PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / diameter).floor();
    let rows = ((PAGE_HEIGHT_MM - MARGIN_MM - TOP_OFFSET_MM) / diameter).floor();
    columns.max(0.0) * rows.max(0.0)
}

/// Tile circles of `diameter` over the printable area.
///
/// Columns start at `margin + r` and rows at `top_offset + r`, both stepping by
/// the diameter while the circle still fits. Circles are emitted column by
/// column (every row of a column before the next column). A diameter too large
/// to fit yields an empty grid.
///
/// Callers are expected to pass a finite, positive diameter
/// (see [`crate::core::layout::validate_diameter`]).
pub fn tile_circles(diameter: f64) -> Vec<Circle> {
    let radius = diameter / 2.0;
    let max_x = PAGE_WIDTH_MM - MARGIN_MM - radius;
    let max_y = PAGE_HEIGHT_MM - MARGIN_MM - radius;

    let mut circles = Vec::new();
    let mut x = MARGIN_MM + radius;
    while x <= max_x {
        let mut y = TOP_OFFSET_MM + radius;
        while y <= max_y {
            circles.push(Circle {
                center_x: x,
                center_y: y,
                radius,
            });
            y += diameter;
        }
        x += diameter;
    }
    circles
}
