use actix_multipart::form::{bytes::Bytes as UploadedFile, text::Text, MultipartForm};
use actix_web::{web, HttpResponse, Responder};

use crate::core::Analyzer;
use crate::models::{ErrorResponse, HealthResponse, Survey};
use crate::services::decode_rgb;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
}

/// Configure all analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/analyze", web::post().to(analyze));
}

/// Multipart payload for the analyze endpoint
#[derive(Debug, MultipartForm)]
pub struct AnalyzeForm {
    /// Uploaded photo bytes, format sniffed during decode
    #[multipart(limit = "10MB")]
    pub image: UploadedFile,
    /// Survey answers as a JSON document
    pub survey_json: Text<String>,
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Analyze endpoint
///
/// POST /analyze
///
/// Multipart form fields:
/// - `image`: the photo to analyze
/// - `survey_json`: JSON-encoded preference survey
async fn analyze(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<AnalyzeForm>,
) -> impl Responder {
    let survey: Survey = match serde_json::from_str(&form.survey_json) {
        Ok(survey) => survey,
        Err(e) => {
            tracing::info!("Rejected survey JSON: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_survey".to_string(),
                message: format!("Invalid survey JSON: {}", e),
                status_code: 400,
            });
        }
    };

    let image = match decode_rgb(&form.image.data) {
        Ok(image) => image,
        Err(e) => {
            tracing::info!("Rejected image upload ({} bytes): {}", form.image.data.len(), e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_image".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    tracing::info!(
        "Analyzing {}x{} image, {} occasions, {} goals",
        image.width(),
        image.height(),
        survey.primary_occasions.len(),
        survey.style_goals.len()
    );

    let response = state.analyzer.analyze(&image, &survey);

    tracing::debug!(
        "Classified palette {:?} with {} dominant colors, recommending {} styles",
        response.palette_name,
        response.dominant_colors.len(),
        response.style_profile.recommended_styles.len()
    );

    HttpResponse::Ok().json(response)
}
