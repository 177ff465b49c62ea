use image::imageops::{self, FilterType};
use image::RgbImage;
use std::borrow::Cow;

/// Guards the saturation division on pure-black pixels
pub const SATURATION_EPSILON: f64 = 1e-6;

/// Per-pixel value and saturation from normalized channel intensities
///
/// value = max(R,G,B); saturation = (max - min) / (max + epsilon).
/// Both land in [0,1].
#[inline]
pub fn value_and_saturation(rgb: [u8; 3]) -> (f64, f64) {
    let r = rgb[0] as f64 / 255.0;
    let g = rgb[1] as f64 / 255.0;
    let b = rgb[2] as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    (max, (max - min) / (max + SATURATION_EPSILON))
}

/// Image-wide mean brightness and saturation
///
/// Arithmetic mean of the per-pixel quantities over every pixel of the
/// (already downsampled) raster. A zero-pixel raster yields (0.0, 0.0).
pub fn brightness_saturation(image: &RgbImage) -> (f64, f64) {
    let mut value_sum = 0.0;
    let mut saturation_sum = 0.0;
    let mut pixel_count = 0usize;

    for pixel in image.pixels() {
        let (value, saturation) = value_and_saturation(pixel.0);
        value_sum += value;
        saturation_sum += saturation;
        pixel_count += 1;
    }

    if pixel_count == 0 {
        return (0.0, 0.0);
    }

    (
        value_sum / pixel_count as f64,
        saturation_sum / pixel_count as f64,
    )
}

/// Shrink a raster so its longer side is at most `max_dimension`
///
/// Aspect ratio is preserved and images already within the bound are
/// returned as-is (never upscaled). The filter is fixed to Lanczos3 since
/// the resampled pixels feed the statistics means.
pub fn shrink_to_max(image: &RgbImage, max_dimension: u32) -> Cow<'_, RgbImage> {
    let (width, height) = image.dimensions();
    let longer = width.max(height);

    if max_dimension == 0 || longer <= max_dimension {
        return Cow::Borrowed(image);
    }

    let scale = max_dimension as f64 / longer as f64;
    let new_width = ((width as f64 * scale) as u32).max(1);
    let new_height = ((height as f64 * scale) as u32).max(1);

    Cow::Owned(imageops::resize(
        image,
        new_width,
        new_height,
        FilterType::Lanczos3,
    ))
}

/// Round to the 4 decimal digits used in wire output
#[inline]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, image::Rgb(rgb))
    }

    #[test]
    fn test_black_image_statistics() {
        let (brightness, saturation) = brightness_saturation(&solid_image(8, 8, [0, 0, 0]));
        assert_eq!(brightness, 0.0);
        assert_eq!(saturation, 0.0);
    }

    #[test]
    fn test_white_image_statistics() {
        let (brightness, saturation) = brightness_saturation(&solid_image(8, 8, [255, 255, 255]));
        assert!((brightness - 1.0).abs() < 1e-9);
        assert!(saturation < 1e-5);
    }

    #[test]
    fn test_pure_red_is_fully_saturated() {
        let (brightness, saturation) = brightness_saturation(&solid_image(4, 4, [255, 0, 0]));
        assert!((brightness - 1.0).abs() < 1e-9);
        assert!(saturation > 0.999 && saturation <= 1.0);
    }

    #[test]
    fn test_statistics_stay_in_unit_range() {
        let gradient = RgbImage::from_fn(32, 32, |x, y| {
            image::Rgb([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8])
        });
        let (brightness, saturation) = brightness_saturation(&gradient);
        assert!((0.0..=1.0).contains(&brightness));
        assert!((0.0..=1.0).contains(&saturation));
    }

    #[test]
    fn test_empty_raster_yields_zeroes() {
        let empty = RgbImage::new(0, 0);
        assert_eq!(brightness_saturation(&empty), (0.0, 0.0));
    }

    #[test]
    fn test_shrink_halves_oversized_raster() {
        let image = solid_image(1024, 512, [10, 20, 30]);
        let shrunk = shrink_to_max(&image, 512);
        assert_eq!(shrunk.dimensions(), (512, 256));
    }

    #[test]
    fn test_shrink_never_upscales() {
        let image = solid_image(100, 50, [10, 20, 30]);
        let shrunk = shrink_to_max(&image, 512);
        assert_eq!(shrunk.dimensions(), (100, 50));
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(0.5), 0.5);
        assert_eq!(round4(1.0), 1.0);
    }
}
