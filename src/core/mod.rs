// Core pipeline exports
pub mod analyzer;
pub mod colors;
pub mod palette;
pub mod recommend;
pub mod stats;
pub mod survey;
pub mod tables;

pub use analyzer::Analyzer;
pub use colors::dominant_colors;
pub use palette::classify_palette;
pub use recommend::build_style_profile;
pub use stats::{brightness_saturation, shrink_to_max, value_and_saturation};
pub use survey::{normalize_goals, normalize_occasions};
