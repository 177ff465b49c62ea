use serde::{Deserialize, Serialize};

/// One representative color extracted from the uploaded photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantColor {
    pub rgb: [u8; 3],
    pub hex: String,
    /// Share of pixels mapped to this color, rounded to 4 decimals
    pub proportion: f64,
}

impl DominantColor {
    pub fn new(rgb: [u8; 3], proportion: f64) -> Self {
        Self {
            hex: format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]),
            rgb,
            proportion,
        }
    }
}

/// Coarse classification of an image's color character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteCategory {
    #[serde(rename = "Neutral / Minimalist")]
    NeutralMinimalist,
    #[serde(rename = "Soft / Earthy")]
    SoftEarthy,
    #[serde(rename = "Bold / Vibrant")]
    BoldVibrant,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl PaletteCategory {
    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            PaletteCategory::NeutralMinimalist => "Neutral / Minimalist",
            PaletteCategory::SoftEarthy => "Soft / Earthy",
            PaletteCategory::BoldVibrant => "Bold / Vibrant",
            PaletteCategory::Unknown => "Unknown",
        }
    }
}

/// Everything derived from the photo alone, immutable after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageStats {
    pub dominant_colors: Vec<DominantColor>,
    pub brightness: f64,
    pub saturation: f64,
    pub palette: PaletteCategory,
}

/// Why a set of styles was recommended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhySummary {
    pub palette_match: String,
    pub occasions: Vec<String>,
    pub goals: Vec<String>,
}

/// Final recommendation produced by the synthesizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleProfile {
    pub recommended_styles: Vec<String>,
    pub why: WhySummary,
    pub fit_tips: Vec<String>,
    pub starter_capsule: Vec<String>,
}

/// Process-wide analysis knobs, fixed for the lifetime of the service
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    /// Longer image side is shrunk to at most this many pixels
    pub max_dimension: u32,
    /// Number of representative colors extracted per image
    pub color_count: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_dimension: 512,
            color_count: 5,
        }
    }
}
