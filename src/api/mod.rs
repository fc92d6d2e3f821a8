//! High-level, ergonomic library API: build the four exercise pages in memory,
//! or go straight from `SheetParams` to a PDF on disk (plus optional layout
//! sidecar). Prefer these entrypoints over the low-level `core` and `io`
//! modules when embedding circlegrid.
use chrono::NaiveDate;
use tracing::info;

use crate::core::date::{resolve_date, resolve_date_local};
use crate::core::layout::build_pages;
use crate::core::params::SheetParams;
use crate::error::Result;
use crate::io::writers::pdf::write_pdf;
use crate::io::writers::sidecar::write_layout_sidecar;
use crate::types::PageSpec;

/// Build the four pages for the given diameters and an already-resolved date label.
pub fn generate_pages(left_diameter: f64, right_diameter: f64, date: &str) -> Result<Vec<PageSpec>> {
    build_pages(left_diameter, right_diameter, date)
}

/// Summary of a generated sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetReport {
    /// Resolved date label printed on every page
    pub date: String,
    pub left_diameter: f64,
    pub right_diameter: f64,
    /// Circle count per page, in page order
    pub circles_per_page: Vec<usize>,
}

/// Resolve the date against `today`, lay out the pages and write the PDF
/// (and the sidecar when `params.layout_json` is set).
pub fn generate_sheet_to_path(params: &SheetParams, today: NaiveDate) -> Result<SheetReport> {
    write_sheet(params, resolve_date(&params.date, today))
}

/// `generate_sheet_to_path` with the date resolved against the local clock.
pub fn generate_sheet_to_path_local(params: &SheetParams) -> Result<SheetReport> {
    write_sheet(params, resolve_date_local(&params.date))
}

fn write_sheet(params: &SheetParams, date: String) -> Result<SheetReport> {
    let pages = generate_pages(params.left_diameter, params.right_diameter, &date)?;

    write_pdf(&pages, &params.output)?;

    if let Some(sidecar_path) = &params.layout_json {
        let resolved = SheetParams {
            date: date.clone(),
            ..params.clone()
        };
        write_layout_sidecar(sidecar_path, &resolved, &pages)?;
    }

    let circles_per_page: Vec<usize> = pages.iter().map(|p| p.circles.len()).collect();
    info!(
        "Sheet complete: date={} circles per page={:?}",
        date, circles_per_page
    );

    Ok(SheetReport {
        date,
        left_diameter: params.left_diameter,
        right_diameter: params.right_diameter,
        circles_per_page,
    })
}
