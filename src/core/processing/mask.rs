use image::RgbaImage;
use tracing::debug;

use crate::types::Rgba8;

/// True when red, green and blue are each strictly above `threshold`.
/// Alpha is ignored.
pub fn is_near_white(px: &Rgba8, threshold: u8) -> bool {
    px[0] > threshold && px[1] > threshold && px[2] > threshold
}

/// Replace every near-white pixel with `fill`, in place.
///
/// Pure per-pixel map: no neighbourhood analysis, so light pixels inside the
/// artwork are cleared too. Returns how many pixels were replaced.
pub fn apply_near_white_mask(img: &mut RgbaImage, threshold: u8, fill: Rgba8) -> usize {
    let mut cleared = 0usize;
    for px in img.pixels_mut() {
        if is_near_white(px, threshold) {
            *px = fill;
            cleared += 1;
        }
    }
    debug!(
        "Near-white mask: cleared {} of {} pixels (threshold > {})",
        cleared,
        img.width() as usize * img.height() as usize,
        threshold
    );
    cleared
}
