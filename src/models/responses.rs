use serde::{Deserialize, Serialize};

use crate::models::domain::{DominantColor, PaletteCategory, StyleProfile};

/// Response for the analyze endpoint
///
/// Flattens the image statistics next to the synthesized style profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub dominant_colors: Vec<DominantColor>,
    pub brightness: f64,
    pub saturation: f64,
    pub palette_name: PaletteCategory,
    pub style_profile: StyleProfile,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
