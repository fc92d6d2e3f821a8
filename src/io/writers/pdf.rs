use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, Greyscale, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference,
    calculate_points_for_circle,
};
use tracing::{debug, info};

use crate::core::layout::{MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::error::{Error, Result};
use crate::types::PageSpec;

/// Header font size in points
pub const HEADER_FONT_SIZE_PT: f32 = 16.0;

/// Header cell height in mm; the text baseline sits inside this band below the top margin
pub const HEADER_CELL_HEIGHT_MM: f64 = 10.0;

/// Circle outline width in points
pub const OUTLINE_THICKNESS_PT: f32 = 0.5;

const LAYER_NAME: &str = "Circles";

/// Render all pages into a single PDF written to `writer`.
///
/// Page geometry comes in with a top-left origin; PDF space has its origin at
/// the bottom-left, so every y coordinate is flipped against the page height.
/// An empty `pages` slice is rejected: a PDF always carries at least one page.
pub fn render_pdf<W: Write>(pages: &[PageSpec], writer: W) -> Result<()> {
    let title = match pages.first() {
        Some(page) => format!("Circle drawing exercise {}", page.date),
        None => return Err(Error::Render("no pages to render".to_string())),
    };
    let page_width = Mm(PAGE_WIDTH_MM as f32);
    let page_height = Mm(PAGE_HEIGHT_MM as f32);

    let (doc, first_page, first_layer) = PdfDocument::new(title, page_width, page_height, LAYER_NAME);
    let font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(Error::render)?;

    for (i, page) in pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = doc.add_page(page_width, page_height, LAYER_NAME);
            doc.get_page(page_idx).get_layer(layer_idx)
        };
        draw_header(&layer, &font, page);
        draw_circles(&layer, page);
        debug!(
            "Rendered page {} with {} circles",
            page.page_number,
            page.circles.len()
        );
    }

    let mut out = BufWriter::new(writer);
    doc.save(&mut out).map_err(Error::render)?;
    out.flush()?;
    Ok(())
}

/// Render all pages into a PDF file at `output`, creating or truncating it.
pub fn write_pdf(pages: &[PageSpec], output: &Path) -> Result<()> {
    let file = File::create(output)?;
    render_pdf(pages, file)?;
    info!("Wrote {} pages to {:?}", pages.len(), output);
    Ok(())
}

fn draw_header(layer: &PdfLayerReference, font: &IndirectFontRef, page: &PageSpec) {
    // baseline 7mm into the header cell
    let baseline_from_top = MARGIN_MM + HEADER_CELL_HEIGHT_MM * 0.7;
    layer.use_text(
        page.header(),
        HEADER_FONT_SIZE_PT,
        Mm(MARGIN_MM as f32),
        Mm((PAGE_HEIGHT_MM - baseline_from_top) as f32),
        font,
    );
}

fn draw_circles(layer: &PdfLayerReference, page: &PageSpec) {
    layer.set_outline_color(Color::Greyscale(Greyscale::new(0.0, None)));
    layer.set_outline_thickness(OUTLINE_THICKNESS_PT);

    for circle in &page.circles {
        let outline = Line {
            points: calculate_points_for_circle(
                Mm(circle.radius as f32),
                Mm(circle.center_x as f32),
                Mm((PAGE_HEIGHT_MM - circle.center_y) as f32),
            ),
            is_closed: true,
        };
        layer.add_line(outline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::build_pages;

    #[test]
    fn renders_pdf_bytes() {
        let pages = build_pages(20.0, 10.0, "2024-01-01").unwrap();
        let mut buf: Vec<u8> = Vec::new();
        render_pdf(&pages, &mut buf).unwrap();
        assert!(buf.starts_with(b"%PDF-"));
    }

    #[test]
    fn renders_pages_without_circles() {
        let pages = build_pages(300.0, 300.0, "2024-01-01").unwrap();
        let mut buf: Vec<u8> = Vec::new();
        render_pdf(&pages, &mut buf).unwrap();
        assert!(buf.starts_with(b"%PDF-"));
    }

    #[test]
    fn empty_page_list_is_rejected() {
        let mut buf: Vec<u8> = Vec::new();
        let err = render_pdf(&[], &mut buf).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let pages = build_pages(17.0, 17.0, "2024-01-01").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("output.pdf");
        let err = write_pdf(&pages, &output).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
