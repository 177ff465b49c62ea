use image::RgbImage;

use crate::core::colors::dominant_colors;
use crate::core::palette::classify_palette;
use crate::core::recommend::build_style_profile;
use crate::core::stats::{brightness_saturation, round4, shrink_to_max};
use crate::models::{AnalysisOptions, AnalysisResponse, ImageStats, Survey};

/// Pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Shared downsampling pass (longer side capped, never upscaled)
/// 2. Dominant-color sampling and brightness/saturation statistics
/// 3. Palette classification over the dominant colors
/// 4. Style synthesis from palette + survey
///
/// Pure and stateless; one instance is shared across all requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
    options: AnalysisOptions,
}

impl Analyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn with_default_options() -> Self {
        Self {
            options: AnalysisOptions::default(),
        }
    }

    /// Run the full pipeline for one decoded image and parsed survey
    ///
    /// Infallible: however degenerate the inputs, the result is a
    /// structurally valid response. Identical inputs produce identical
    /// output.
    pub fn analyze(&self, image: &RgbImage, survey: &Survey) -> AnalysisResponse {
        // Stage 1: single shrink pass feeding both analysis stages
        let raster = shrink_to_max(image, self.options.max_dimension);

        // Stage 2: color sampling + statistics over the same raster
        let dominants = dominant_colors(&raster, self.options.color_count);
        let (brightness, saturation) = brightness_saturation(&raster);

        // Stage 3: palette classification
        let palette = classify_palette(&dominants);

        let stats = ImageStats {
            dominant_colors: dominants,
            brightness: round4(brightness),
            saturation: round4(saturation),
            palette,
        };

        // Stage 4: recommendation synthesis
        let style_profile = build_style_profile(&stats, survey);

        AnalysisResponse {
            dominant_colors: stats.dominant_colors,
            brightness: stats.brightness,
            saturation: stats.saturation,
            palette_name: stats.palette,
            style_profile,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::with_default_options()
    }
}
