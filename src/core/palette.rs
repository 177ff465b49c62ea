use crate::core::stats::value_and_saturation;
use crate::models::{DominantColor, PaletteCategory};

/// Mean dominant-color saturation below this is Neutral / Minimalist
pub const NEUTRAL_MAX_SATURATION: f64 = 0.15;
/// Mean dominant-color saturation below this (and above neutral) is Soft / Earthy
pub const SOFT_MAX_SATURATION: f64 = 0.35;

/// Classify the dominant-color set into a palette category
///
/// Uses the same max-min saturation formula as the statistics pass, applied
/// to the dominant colors only, and compares the mean against two fixed
/// thresholds. An empty set classifies as Unknown.
pub fn classify_palette(dominants: &[DominantColor]) -> PaletteCategory {
    if dominants.is_empty() {
        return PaletteCategory::Unknown;
    }

    let saturation_sum: f64 = dominants
        .iter()
        .map(|color| value_and_saturation(color.rgb).1)
        .sum();
    let mean_saturation = saturation_sum / dominants.len() as f64;

    if mean_saturation < NEUTRAL_MAX_SATURATION {
        PaletteCategory::NeutralMinimalist
    } else if mean_saturation < SOFT_MAX_SATURATION {
        PaletteCategory::SoftEarthy
    } else {
        PaletteCategory::BoldVibrant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(rgb: [u8; 3]) -> DominantColor {
        DominantColor::new(rgb, 0.2)
    }

    #[test]
    fn test_empty_dominants_classify_as_unknown() {
        assert_eq!(classify_palette(&[]), PaletteCategory::Unknown);
    }

    #[test]
    fn test_greys_classify_as_neutral() {
        let dominants = vec![color([30, 30, 30]), color([128, 128, 128]), color([220, 220, 220])];
        assert_eq!(classify_palette(&dominants), PaletteCategory::NeutralMinimalist);
    }

    #[test]
    fn test_muted_tones_classify_as_soft_earthy() {
        // saturation = (150-105) / 150 = 0.30 per color
        let dominants = vec![color([150, 120, 105]), color([150, 105, 120])];
        assert_eq!(classify_palette(&dominants), PaletteCategory::SoftEarthy);
    }

    #[test]
    fn test_saturated_hues_classify_as_bold() {
        let dominants = vec![color([255, 0, 0]), color([0, 200, 50])];
        assert_eq!(classify_palette(&dominants), PaletteCategory::BoldVibrant);
    }

    #[test]
    fn test_classification_depends_on_mean_not_outliers() {
        // One vivid color among greys keeps the mean under the soft bound
        let dominants = vec![
            color([128, 128, 128]),
            color([128, 128, 128]),
            color([128, 128, 128]),
            color([255, 0, 0]),
        ];
        assert_eq!(classify_palette(&dominants), PaletteCategory::SoftEarthy);
    }

    #[test]
    fn test_pure_black_does_not_divide_by_zero() {
        let dominants = vec![color([0, 0, 0])];
        assert_eq!(classify_palette(&dominants), PaletteCategory::NeutralMinimalist);
    }
}
