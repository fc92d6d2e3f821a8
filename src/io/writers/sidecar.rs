use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::SheetParams;
use crate::error::Result;
use crate::types::PageSpec;

/// JSON description of a generated sheet: who made it, with what parameters,
/// and every page with its circle grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSidecar {
    pub generator: String,
    pub version: String,
    pub params: SheetParams,
    pub pages: Vec<PageSpec>,
}

impl LayoutSidecar {
    pub fn new(params: &SheetParams, pages: &[PageSpec]) -> Self {
        Self {
            generator: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            params: params.clone(),
            pages: pages.to_vec(),
        }
    }
}

/// Write the layout sidecar as pretty-printed JSON to `path`.
pub fn write_layout_sidecar(path: &Path, params: &SheetParams, pages: &[PageSpec]) -> Result<()> {
    let sidecar = LayoutSidecar::new(params, pages);
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &sidecar)?;
    info!("Layout sidecar written: {:?}", path);
    Ok(())
}
