//! Style Sage - image-driven style recommendation service
//!
//! This library provides the analysis pipeline behind the Style Sage app:
//! dominant-color extraction and brightness/saturation statistics from a
//! user photo, palette classification, and a rules engine that merges the
//! palette with survey preferences into a ranked style profile.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify_palette, dominant_colors, Analyzer};
pub use crate::models::{
    AnalysisOptions, AnalysisResponse, DominantColor, ImageStats, PaletteCategory, StyleProfile,
    Survey,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let analyzer = Analyzer::with_default_options();
        let image = image::RgbImage::from_pixel(4, 4, image::Rgb([128, 128, 128]));
        let response = analyzer.analyze(&image, &Survey::default());
        assert_eq!(response.palette_name, PaletteCategory::NeutralMinimalist);
    }
}
