use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::info;

use crate::error::Result;

/// Decode any raster format the `image` crate understands and normalize it to RGBA8.
///
/// The format is sniffed from the file contents, so a mislabelled extension
/// still decodes. Sources without alpha get a fully opaque channel; 16-bit
/// sources are reduced to 8 bits per channel.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let decoded = reader.decode()?;
    info!(
        "Loaded {:?}: {}x{} {:?} ({:?})",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color(),
        format
    );
    Ok(decoded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba};

    #[test]
    fn rgb_source_gets_opaque_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&path).unwrap();

        let img = load_rgba(&path).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert!(img.pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn grayscale_source_expands_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(3, 1, Luma([240])).save(&path).unwrap();

        let img = load_rgba(&path).unwrap();
        assert!(img.pixels().all(|p| *p == Rgba([240, 240, 240, 255])));
    }

    #[test]
    fn format_is_sniffed_from_content() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("logo.png");
        RgbImage::from_pixel(1, 1, Rgb([9, 9, 9])).save(&png).unwrap();
        let misnamed = dir.path().join("logo.dat");
        std::fs::copy(&png, &misnamed).unwrap();

        let img = load_rgba(&misnamed).unwrap();
        assert_eq!(*img.get_pixel(0, 0), Rgba([9, 9, 9, 255]));
    }

    #[test]
    fn garbage_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = load_rgba(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Image(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_rgba(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
