// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnalysisOptions, DominantColor, ImageStats, PaletteCategory, StyleProfile, WhySummary};
pub use requests::Survey;
pub use responses::{AnalysisResponse, ErrorResponse, HealthResponse};
