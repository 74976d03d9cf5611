use image::RgbaImage;
use image::imageops;
use tracing::info;

use crate::types::BoundingBox;

/// Copy out exactly the pixels inside `bounds` (inclusive, no padding).
pub fn crop_to_bounds(img: &RgbaImage, bounds: BoundingBox) -> RgbaImage {
    info!(
        "Cropping {}x{} to {}",
        img.width(),
        img.height(),
        bounds
    );
    imageops::crop_imm(
        img,
        bounds.min_x,
        bounds.min_y,
        bounds.width(),
        bounds.height(),
    )
    .to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn crop_keeps_source_pixels_at_offset() {
        let img = RgbaImage::from_fn(5, 4, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let b = BoundingBox {
            min_x: 1,
            min_y: 2,
            max_x: 3,
            max_y: 3,
        };
        let out = crop_to_bounds(&img, b);
        assert_eq!(out.dimensions(), (3, 2));
        for (x, y, px) in out.enumerate_pixels() {
            assert_eq!(px, img.get_pixel(x + 1, y + 2));
        }
    }

    #[test]
    fn full_bounds_is_identity() {
        let img = RgbaImage::from_fn(3, 3, |x, y| Rgba([x as u8, y as u8, 9, 200]));
        let b = BoundingBox {
            min_x: 0,
            min_y: 0,
            max_x: 2,
            max_y: 2,
        };
        assert_eq!(crop_to_bounds(&img, b), img);
    }
}
