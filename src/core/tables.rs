//! Process-wide style rule tables.
//!
//! Built once on first access and never written afterwards. These encode the
//! rules engine: survey labels normalize to canonical tokens, tokens and
//! palette categories map to candidate style lists, and each palette carries
//! a fixed color tip and starter capsule.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::PaletteCategory;

/// Display label -> canonical occasion token
pub static OCCASION_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Work", "work"),
        ("School", "school"),
        ("Dates", "dates"),
        ("Nights Out", "nights_out"),
        ("Weddings", "weddings"),
        ("Interviews", "interviews"),
        ("Travel", "travel"),
    ])
});

/// Display label -> canonical goal token
pub static GOAL_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Look taller", "look_taller"),
        ("Look more muscular", "more_muscular"),
        ("More professional", "professional"),
        ("Be more expressive", "expressive"),
        ("Low maintenance", "low_maintenance"),
    ])
});

/// Canonical occasion token -> candidate styles
pub static OCCASION_STYLES: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        HashMap::from([
            ("work", &["Business Casual", "Smart Casual"] as &[&str]),
            ("school", &["Casual", "Athleisure"] as &[&str]),
            ("dates", &["Smart Casual", "Chic Minimalist"] as &[&str]),
            ("nights_out", &["Streetwear", "Trendy"] as &[&str]),
            ("weddings", &["Modern Formal"] as &[&str]),
            ("interviews", &["Business Formal", "Smart Casual"] as &[&str]),
            ("travel", &["Comfy Minimalist", "Athleisure"] as &[&str]),
        ])
    });

/// Canonical goal token -> candidate styles
pub static GOAL_STYLES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        ("look_taller", &["Monochrome Minimalist", "Slim-Fit Modern"] as &[&str]),
        ("more_muscular", &["Structured Streetwear", "Layered Casual"] as &[&str]),
        ("professional", &["Business Casual", "Smart Casual"] as &[&str]),
        ("expressive", &["Streetwear", "Eclectic"] as &[&str]),
        ("low_maintenance", &["Minimalist", "Capsule Wardrobe"] as &[&str]),
    ])
});

/// Candidate styles for a palette category
///
/// Unknown contributes nothing to the ranking.
pub fn palette_styles(palette: PaletteCategory) -> &'static [&'static str] {
    match palette {
        PaletteCategory::NeutralMinimalist => {
            &["Minimalist", "Modern Classic", "Capsule Wardrobe"]
        }
        PaletteCategory::SoftEarthy => &["Scandi Casual", "Workwear", "Smart Casual"],
        PaletteCategory::BoldVibrant => &["Streetwear", "Trendy", "Sport Luxe"],
        PaletteCategory::Unknown => &[],
    }
}

/// Color tip for a palette category; Unknown shares the Bold/Vibrant text
pub fn palette_color_tip(palette: PaletteCategory) -> &'static str {
    match palette {
        PaletteCategory::NeutralMinimalist => "Lean into blacks, whites, greys, navy, and olive.",
        PaletteCategory::SoftEarthy => "Try tan, camel, cream, sage, and rust for warmth.",
        PaletteCategory::BoldVibrant | PaletteCategory::Unknown => {
            "Lean into saturated hues; keep silhouette clean to avoid noise."
        }
    }
}

/// Starter capsule for a palette category; Unknown shares the Bold/Vibrant list
pub fn palette_capsule(palette: PaletteCategory) -> &'static [&'static str] {
    match palette {
        PaletteCategory::NeutralMinimalist => &[
            "White tee",
            "Black slim jeans",
            "Navy overshirt",
            "Grey hoodie",
            "White sneakers",
            "Black boots",
        ],
        PaletteCategory::SoftEarthy => &[
            "Cream knit",
            "Olive chinos",
            "Sage overshirt",
            "Tan chore coat",
            "Brown leather sneakers",
        ],
        PaletteCategory::BoldVibrant | PaletteCategory::Unknown => &[
            "Bold graphic tee",
            "Black cargos",
            "Clean varsity jacket",
            "Technical windbreaker",
            "Statement sneakers",
        ],
    }
}
