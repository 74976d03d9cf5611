use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{DEFAULT_NEAR_WHITE_THRESHOLD, OutputFormat, Rgba8, TRANSPARENT_WHITE};

/// Processing parameters suitable for JSON preset files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingParams {
    /// A pixel is background when red, green and blue are all strictly above this
    pub threshold: u8,
    /// RGBA written over background pixels
    pub fill: [u8; 4],
    pub format: OutputFormat,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_NEAR_WHITE_THRESHOLD,
            fill: TRANSPARENT_WHITE,
            format: OutputFormat::Png,
        }
    }
}

impl ProcessingParams {
    /// Load a preset; fields missing from the file keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn fill_pixel(&self) -> Rgba8 {
        image::Rgba(self.fill)
    }
}
