use tracing::debug;

use crate::core::layout::MAX_CIRCLES_PER_PAGE;
use crate::core::layout::grid::{grid_capacity, tile_circles};
use crate::error::{Error, Result};
use crate::types::{PageSpec, Side};

/// Number of pages in one exercise sheet
pub const PAGE_COUNT: usize = 4;

/// (patch, pen) condition per page, indexed by `page_number - 1`
pub const PAGE_CONDITIONS: [(Side, Side); PAGE_COUNT] = [
    (Side::Left, Side::Left),
    (Side::Left, Side::Right),
    (Side::Right, Side::Left),
    (Side::Right, Side::Right),
];

/// Reject diameters the grid cannot tile: NaN, infinite, zero or negative, or
/// so small that a page would exceed [`MAX_CIRCLES_PER_PAGE`].
pub fn validate_diameter(arg: &'static str, diameter: f64) -> Result<f64> {
    if diameter.is_finite() && diameter > 0.0 && grid_capacity(diameter) <= MAX_CIRCLES_PER_PAGE {
        Ok(diameter)
    } else {
        Err(Error::InvalidParameter {
            arg,
            value: diameter.to_string(),
        })
    }
}

/// Build the four pages of the sheet.
///
/// Odd pages use `left_diameter`, even pages `right_diameter`; the patch/pen
/// labels come from [`PAGE_CONDITIONS`].
pub fn build_pages(left_diameter: f64, right_diameter: f64, date: &str) -> Result<Vec<PageSpec>> {
    validate_diameter("left_diameter", left_diameter)?;
    validate_diameter("right_diameter", right_diameter)?;

    let pages: Vec<PageSpec> = PAGE_CONDITIONS
        .iter()
        .zip(1u8..)
        .map(|(&(patch, pen), page_number)| {
            let diameter = if page_number % 2 == 1 {
                left_diameter
            } else {
                right_diameter
            };
            let circles = tile_circles(diameter);
            debug!(
                "Page {}: patch={} pen={} diameter={:.1}mm circles={}",
                page_number,
                patch,
                pen,
                diameter,
                circles.len()
            );
            PageSpec {
                page_number,
                patch,
                pen,
                diameter,
                date: date.to_string(),
                circles,
            }
        })
        .collect();

    Ok(pages)
}
