use crate::compare::DEFAULT_POSITION_TOLERANCE;
use crate::locate::bands::{DEFAULT_MIN_REGION_HEIGHT, DEFAULT_WHITESPACE_THRESHOLD};
use crate::locate::WhitespaceBandLocator;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DPI: u32 = 300;

/// Settings for one kind of layout check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Page rendering resolution. Positions are in pixels at this DPI.
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    /// Rows with a mean intensity above this (0-255) are blank.
    #[serde(default = "default_whitespace_threshold")]
    pub whitespace_threshold: u8,
    /// Gaps between blank rows must be taller than this to hold a barcode.
    #[serde(default = "default_min_region_height")]
    pub min_region_height: u32,
    /// Allowed drift of a barcode's top-left corner, in pixels.
    #[serde(default = "default_position_tolerance")]
    pub position_tolerance: u32,
}

impl ValidationProfile {
    pub fn locator(&self) -> WhitespaceBandLocator {
        WhitespaceBandLocator {
            whitespace_threshold: self.whitespace_threshold,
            min_region_height: self.min_region_height,
        }
    }
}

impl Default for ValidationProfile {
    fn default() -> Self {
        ValidationProfile {
            name: "default".into(),
            description: None,
            version: "1.0".into(),
            dpi: DEFAULT_DPI,
            whitespace_threshold: DEFAULT_WHITESPACE_THRESHOLD,
            min_region_height: DEFAULT_MIN_REGION_HEIGHT,
            position_tolerance: DEFAULT_POSITION_TOLERANCE,
        }
    }
}

fn default_dpi() -> u32 {
    DEFAULT_DPI
}

fn default_whitespace_threshold() -> u8 {
    DEFAULT_WHITESPACE_THRESHOLD
}

fn default_min_region_height() -> u32 {
    DEFAULT_MIN_REGION_HEIGHT
}

fn default_position_tolerance() -> u32 {
    DEFAULT_POSITION_TOLERANCE
}
