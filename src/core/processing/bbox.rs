use image::RgbaImage;

use crate::types::BoundingBox;

/// Smallest rectangle holding every pixel with nonzero alpha.
///
/// Returns `None` when the image has no visible pixel (including a
/// zero-sized image).
pub fn content_bounds(img: &RgbaImage) -> Option<BoundingBox> {
    let mut bounds: Option<BoundingBox> = None;
    for (x, y, px) in img.enumerate_pixels() {
        if px[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => BoundingBox {
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
            },
            Some(b) => BoundingBox {
                min_x: b.min_x.min(x),
                min_y: b.min_y.min(y),
                max_x: b.max_x.max(x),
                max_y: b.max_y.max(y),
            },
        });
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn fully_transparent_has_no_bounds() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 0]));
        assert_eq!(content_bounds(&img), None);
        assert_eq!(content_bounds(&RgbaImage::new(0, 0)), None);
    }

    #[test]
    fn bounds_cover_scattered_pixels() {
        let mut img = RgbaImage::from_pixel(10, 8, Rgba([0, 0, 0, 0]));
        img.put_pixel(2, 6, Rgba([1, 2, 3, 1]));
        img.put_pixel(7, 1, Rgba([1, 2, 3, 255]));
        img.put_pixel(4, 4, Rgba([1, 2, 3, 255]));

        let b = content_bounds(&img).unwrap();
        assert_eq!(
            b,
            BoundingBox {
                min_x: 2,
                min_y: 1,
                max_x: 7,
                max_y: 6
            }
        );
        assert_eq!((b.width(), b.height()), (6, 6));
    }

    #[test]
    fn color_of_transparent_pixels_is_ignored() {
        // visible colour but zero alpha does not count
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]));
        img.put_pixel(3, 3, Rgba([255, 255, 255, 255]));
        let b = content_bounds(&img).unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (3, 3, 3, 3));
    }
}
