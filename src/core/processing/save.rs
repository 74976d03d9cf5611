use image::RgbaImage;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::io::writers::png::write_rgba_png;
use crate::io::writers::tiff::write_rgba_tiff;
use crate::types::OutputFormat;

pub fn save_rgba_image(img: &RgbaImage, output: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Png => write_rgba_png(output, img)?,
        OutputFormat::Tiff => write_rgba_tiff(output, img)?,
    }
    info!(
        "Saved {} {}x{} to {:?}",
        format,
        img.width(),
        img.height(),
        output
    );
    Ok(())
}
