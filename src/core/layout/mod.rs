//! Page and grid layout for the exercise sheet.
//!
//! All geometry is in millimeters on a fixed A4 portrait page, measured from
//! the top-left corner. `grid` tiles circles over the printable area and
//! `pages` assigns the patch/pen condition and diameter to each of the four
//! pages.
pub mod grid;
pub mod pages;

pub use grid::{grid_capacity, tile_circles};
pub use pages::{PAGE_CONDITIONS, PAGE_COUNT, build_pages, validate_diameter};

/// A4 portrait width in mm
pub const PAGE_WIDTH_MM: f64 = 210.0;

/// A4 portrait height in mm
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Left, right and bottom margin in mm
pub const MARGIN_MM: f64 = 10.0;

/// Distance from the top edge to the first row of circles; leaves room for the header
pub const TOP_OFFSET_MM: f64 = 30.0;

/// Largest grid a single page may hold. Diameters below roughly 0.7mm exceed it;
/// far smaller ones would no longer advance the tiling coordinates at all.
pub const MAX_CIRCLES_PER_PAGE: f64 = 100_000.0;
