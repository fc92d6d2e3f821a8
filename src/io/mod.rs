//! Output layer: `writers` for the printable PDF and the JSON layout sidecar.
pub mod writers;

pub use writers::pdf::{render_pdf, write_pdf};
pub use writers::sidecar::{LayoutSidecar, write_layout_sidecar};
