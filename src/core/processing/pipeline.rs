use std::path::PathBuf;

use image::RgbaImage;
use tracing::{debug, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::bbox::content_bounds;
use crate::core::processing::crop::crop_to_bounds;
use crate::core::processing::mask::apply_near_white_mask;
use crate::types::BoundingBox;

/// Summary of one masking/trimming pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub source_width: u32,
    pub source_height: u32,
    pub width: u32,
    pub height: u32,
    /// Pixels replaced by the fill colour
    pub cleared_pixels: usize,
    /// Visible content after masking; `None` when nothing stayed visible
    pub bounding_box: Option<BoundingBox>,
    /// Set once the result has been written to disk
    pub output: Option<PathBuf>,
}

impl ProcessReport {
    pub fn cropped(&self) -> bool {
        self.bounding_box.is_some()
    }
}

/// Masked (and possibly trimmed) image together with its report
#[derive(Debug, Clone)]
pub struct ProcessedLogo {
    pub image: RgbaImage,
    pub report: ProcessReport,
}

/// Mask near-white pixels, then trim to the visible content.
///
/// If the mask leaves no visible pixel the full extent is kept.
pub fn mask_and_trim(mut img: RgbaImage, params: &ProcessingParams) -> ProcessedLogo {
    let (source_width, source_height) = img.dimensions();
    let cleared_pixels = apply_near_white_mask(&mut img, params.threshold, params.fill_pixel());

    let bounding_box = content_bounds(&img);
    let image = match bounding_box {
        Some(bounds) => {
            debug!("Content bounds: {}", bounds);
            crop_to_bounds(&img, bounds)
        }
        None => {
            warn!(
                "No visible pixels left after masking; keeping full {}x{} extent",
                source_width, source_height
            );
            img
        }
    };

    let (width, height) = image.dimensions();
    ProcessedLogo {
        image,
        report: ProcessReport {
            source_width,
            source_height,
            width,
            height,
            cleared_pixels,
            bounding_box,
            output: None,
        },
    }
}
