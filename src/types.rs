//! Shared types and constants used across logotrim.
//! Includes the `BoundingBox` of visible content, the lossless `OutputFormat`
//! choices, and the named near-white threshold and fill colour.
use clap::ValueEnum;
use image::Rgba;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA pixel.
pub type Rgba8 = Rgba<u8>;

/// Channels strictly above this value on red, green and blue count as background.
pub const DEFAULT_NEAR_WHITE_THRESHOLD: u8 = 235;

/// Replacement for background pixels: white, fully transparent.
pub const TRANSPARENT_WHITE: [u8; 4] = [255, 255, 255, 0];

/// Inclusive pixel rectangle containing every visible (alpha > 0) pixel.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Whether `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})-({}, {}) [{}x{}]",
            self.min_x,
            self.min_y,
            self.max_x,
            self.max_y,
            self.width(),
            self.height()
        )
    }
}

/// Output container. Both keep per-pixel alpha losslessly.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Tiff,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Tiff => "tiff",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Tiff => "TIFF",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pixel_box_is_one_by_one() {
        let b = BoundingBox {
            min_x: 3,
            min_y: 7,
            max_x: 3,
            max_y: 7,
        };
        assert_eq!((b.width(), b.height()), (1, 1));
        assert!(b.contains(3, 7));
        assert!(!b.contains(4, 7));
        assert_eq!(b.to_string(), "(3, 7)-(3, 7) [1x1]");
    }

    #[test]
    fn output_format_serializes_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Tiff).unwrap();
        assert_eq!(json, "\"tiff\"");
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
        assert_eq!(OutputFormat::Png.extension(), "png");
    }
}
