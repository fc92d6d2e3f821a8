use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::date::TODAY_SENTINEL;

/// Default circle diameter in millimeters, for either hand
pub const DEFAULT_DIAMETER_MM: f64 = 17.0;

/// Default output file, relative to the current working directory
pub const DEFAULT_OUTPUT: &str = "output.pdf";

/// Sheet parameters suitable for config files and the layout sidecar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetParams {
    /// Circle diameter (mm) used on the left-hand pages (1 and 3)
    pub left_diameter: f64,
    /// Circle diameter (mm) used on the right-hand pages (2 and 4)
    pub right_diameter: f64,
    /// Date label, either `YYYY-MM-DD` or the `today` sentinel
    pub date: String,
    pub output: PathBuf,
    /// Optional JSON sidecar describing the generated layout
    pub layout_json: Option<PathBuf>,
}

impl Default for SheetParams {
    fn default() -> Self {
        Self {
            left_diameter: DEFAULT_DIAMETER_MM,
            right_diameter: DEFAULT_DIAMETER_MM,
            date: TODAY_SENTINEL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            layout_json: None,
        }
    }
}
