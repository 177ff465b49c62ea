use serde::{Deserialize, Serialize};

/// Preference survey submitted alongside the photo
///
/// All scalar fields are optional and the sequences default to empty.
/// Labels are taken as-is; unrecognized ones are carried through the
/// pipeline rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Survey {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(alias = "age_range", rename = "ageRange", default)]
    pub age_range: Option<String>,
    #[serde(alias = "primary_occasions", rename = "primaryOccasions", default)]
    pub primary_occasions: Vec<String>,
    #[serde(alias = "style_goals", rename = "styleGoals", default)]
    pub style_goals: Vec<String>,
    #[serde(alias = "comfort_vs_aesthetic", rename = "comfortVsAesthetic", default)]
    pub comfort_vs_aesthetic: Option<String>,
    #[serde(alias = "color_prefs", rename = "colorPrefs", default)]
    pub color_prefs: Vec<String>,
    #[serde(default)]
    pub budget: Option<String>,
}
