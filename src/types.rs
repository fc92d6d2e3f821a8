//! Shared types used across circlegrid.
//! Includes `Side` (which eye is patched / which hand holds the pen),
//! the `Circle` primitive and the `PageSpec` page descriptor.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

/// One circle outline, in millimeters from the top-left page corner (y grows downward).
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Circle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

/// Full description of one output page: its label and its circle grid.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PageSpec {
    /// 1-based page number (1..=4)
    pub page_number: u8,
    /// Eye covered during the exercise
    pub patch: Side,
    /// Hand holding the pen
    pub pen: Side,
    pub diameter: f64,
    pub date: String,
    pub circles: Vec<Circle>,
}

impl PageSpec {
    /// Header line rendered at the top of the page.
    pub fn header(&self) -> String {
        format!(
            "{} Eye Patched, Pen in {} Hand | {} | Diameter: {:.1}mm",
            self.patch, self.pen, self.date, self.diameter
        )
    }
}
