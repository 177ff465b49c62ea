use image::RgbImage;

use crate::core::stats::round4;
use crate::models::DominantColor;

/// Extract up to `color_count` dominant colors from a raster
///
/// Median-cut palette reduction: boxes of pixels are recursively split at
/// the median of their widest channel until `color_count` boxes exist, then
/// each box contributes its mean color weighted by its pixel share. Fully
/// deterministic for a given raster.
///
/// Returns colors sorted by descending proportion; ties keep box creation
/// order. A zero-pixel raster yields an empty sequence, which callers treat
/// as a valid low-confidence result.
pub fn dominant_colors(image: &RgbImage, color_count: usize) -> Vec<DominantColor> {
    if color_count == 0 {
        return Vec::new();
    }

    let mut pixels: Vec<[u8; 3]> = image.pixels().map(|pixel| pixel.0).collect();
    let total = pixels.len();
    if total == 0 {
        return Vec::new();
    }

    // Boxes are disjoint index ranges into `pixels`; splitting reorders
    // pixels only within the box being split.
    let mut boxes: Vec<(usize, usize)> = vec![(0, total)];
    while boxes.len() < color_count {
        let Some((box_index, channel)) = widest_splittable_box(&pixels, &boxes) else {
            break;
        };

        let (start, end) = boxes[box_index];
        pixels[start..end].sort_unstable_by_key(|pixel| pixel[channel]);

        let mid = start + (end - start) / 2;
        boxes[box_index] = (start, mid);
        boxes.push((mid, end));
    }

    // (count, creation order, mean color) per non-empty box
    let mut entries: Vec<(usize, usize, [u8; 3])> = Vec::with_capacity(boxes.len());
    for (order, &(start, end)) in boxes.iter().enumerate() {
        let count = end - start;
        if count == 0 {
            continue;
        }

        let mut sums = [0u64; 3];
        for pixel in &pixels[start..end] {
            for channel in 0..3 {
                sums[channel] += pixel[channel] as u64;
            }
        }
        let rgb = [0, 1, 2].map(|channel| (sums[channel] as f64 / count as f64).round() as u8);
        entries.push((count, order, rgb));
    }

    // Distinct boxes can land on the same representative color; pixels then
    // map to one palette entry, so fold their counts together.
    let mut merged: Vec<(usize, usize, [u8; 3])> = Vec::with_capacity(entries.len());
    for (count, order, rgb) in entries {
        if let Some(existing) = merged.iter_mut().find(|entry| entry.2 == rgb) {
            existing.0 += count;
        } else {
            merged.push((count, order, rgb));
        }
    }

    merged.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    merged
        .into_iter()
        .map(|(count, _, rgb)| DominantColor::new(rgb, round4(count as f64 / total as f64)))
        .collect()
}

/// Pick the box with the largest single-channel range
///
/// Only boxes with at least two pixels and a nonzero range qualify; returns
/// the box index and the channel to split on, or None when nothing is left
/// to split.
fn widest_splittable_box(
    pixels: &[[u8; 3]],
    boxes: &[(usize, usize)],
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, u8)> = None;

    for (box_index, &(start, end)) in boxes.iter().enumerate() {
        if end - start < 2 {
            continue;
        }

        for channel in 0..3 {
            let mut lo = u8::MAX;
            let mut hi = u8::MIN;
            for pixel in &pixels[start..end] {
                lo = lo.min(pixel[channel]);
                hi = hi.max(pixel[channel]);
            }

            let range = hi - lo;
            if range == 0 {
                continue;
            }
            if best.map_or(true, |(_, _, widest)| range > widest) {
                best = Some((box_index, channel, range));
            }
        }
    }

    best.map(|(box_index, channel, _)| (box_index, channel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_image_yields_single_color() {
        let image = RgbImage::from_pixel(16, 16, image::Rgb([40, 80, 120]));
        let colors = dominant_colors(&image, 5);

        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].rgb, [40, 80, 120]);
        assert_eq!(colors[0].hex, "#285078");
        assert_eq!(colors[0].proportion, 1.0);
    }

    #[test]
    fn test_two_tone_image_sorted_by_proportion() {
        // Top quarter red, rest blue
        let image = RgbImage::from_fn(16, 16, |_, y| {
            if y < 4 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 255])
            }
        });
        let colors = dominant_colors(&image, 5);

        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].rgb, [0, 0, 255]);
        assert_eq!(colors[0].proportion, 0.75);
        assert_eq!(colors[1].rgb, [255, 0, 0]);
        assert_eq!(colors[1].proportion, 0.25);
    }

    #[test]
    fn test_never_exceeds_requested_count() {
        let noisy = RgbImage::from_fn(64, 64, |x, y| {
            image::Rgb([(x * 4) as u8, (y * 4) as u8, ((x * y) % 256) as u8])
        });

        for k in 1..=8 {
            let colors = dominant_colors(&noisy, k);
            assert!(colors.len() <= k);
        }
    }

    #[test]
    fn test_proportions_sum_to_one_when_nothing_dropped() {
        let image = RgbImage::from_fn(16, 16, |x, _| {
            if x < 8 {
                image::Rgb([255, 255, 255])
            } else {
                image::Rgb([0, 0, 0])
            }
        });
        let colors = dominant_colors(&image, 5);

        let sum: f64 = colors.iter().map(|c| c.proportion).sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_raster_yields_empty_sequence() {
        let empty = RgbImage::new(0, 0);
        assert!(dominant_colors(&empty, 5).is_empty());
    }

    #[test]
    fn test_deterministic_across_runs() {
        let image = RgbImage::from_fn(48, 48, |x, y| {
            image::Rgb([(x * 5) as u8, (y * 5) as u8, ((x + y) * 2) as u8])
        });

        let first = dominant_colors(&image, 5);
        let second = dominant_colors(&image, 5);
        assert_eq!(first, second);
    }
}
