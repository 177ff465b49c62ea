mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{middleware, web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::core::Analyzer;
use crate::models::AnalysisOptions;
use crate::routes::analyze::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Style Sage analysis service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the analysis pipeline with configured options
    let options = AnalysisOptions {
        max_dimension: settings.analysis.max_dimension,
        color_count: settings.analysis.color_count,
    };

    let analyzer = Analyzer::new(options);

    info!("Analyzer initialized with options: {:?}", options);

    // Build application state
    let app_state = AppState { analyzer };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            // Uploads are buffered in memory; keep the budget above the
            // per-field image limit
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(12 * 1024 * 1024)
                    .memory_limit(12 * 1024 * 1024),
            )
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
