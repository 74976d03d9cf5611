//! High-level, ergonomic library API: mask and trim a logo from a file to a
//! file or to an in-memory buffer, or transform an already-decoded image.
//! Prefer these entrypoints over the low-level processing modules.
use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::{ProcessReport, ProcessedLogo, mask_and_trim};
use crate::core::processing::save::save_rgba_image;
use crate::error::{Error, Result};
use crate::io::reader::load_rgba;
use crate::types::OutputFormat;

/// Mask and trim an in-memory RGBA image. Never fails.
pub fn process_image(image: RgbaImage, params: &ProcessingParams) -> ProcessedLogo {
    mask_and_trim(image, params)
}

/// Decode `input` and mask/trim it without touching the disk otherwise.
///
/// Returns [`Error::InputNotFound`] when `input` does not exist.
pub fn process_logo_to_buffer(input: &Path, params: &ProcessingParams) -> Result<ProcessedLogo> {
    if !input.exists() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    let image = load_rgba(input)?;
    Ok(mask_and_trim(image, params))
}

/// Write a processed logo to `output` in `format`, overwriting any existing file.
pub fn save_logo(logo: &ProcessedLogo, output: &Path, format: OutputFormat) -> Result<()> {
    save_rgba_image(&logo.image, output, format)
}

/// Full file-to-file run: decode, mask near-white pixels, trim, write.
///
/// A missing `input` yields [`Error::InputNotFound`] and no file is written.
/// Any decode, encode or write failure comes back as the matching error
/// variant; the output directory is never created.
pub fn process_logo(input: &Path, output: &Path, params: &ProcessingParams) -> Result<ProcessReport> {
    let logo = process_logo_to_buffer(input, params)?;
    save_logo(&logo, output, params.format)?;

    let mut report = logo.report;
    report.output = Some(output.to_path_buf());
    info!(
        "Processed {:?}: {}x{} -> {}x{}, {} pixels cleared",
        input,
        report.source_width,
        report.source_height,
        report.width,
        report.height,
        report.cleared_pixels
    );
    Ok(report)
}
