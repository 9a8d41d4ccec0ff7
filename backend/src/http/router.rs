//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Largest accepted request body, matching the upload form's 10 MB cap.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Frontend and API run on different origins in development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Catalog and calculator endpoints
    let api_v1 = Router::new()
        .route("/exoplanets", get(handlers::list_exoplanets))
        .route("/exoplanets/{id}", get(handlers::get_exoplanet))
        .route("/explorer", get(handlers::get_explorer))
        .route("/projection", post(handlers::project))
        .route("/habitability", post(handlers::score_habitability))
        .route("/classify", post(handlers::classify_planet))
        .route("/snr", post(handlers::estimate_snr));

    // Paths the frontend calls for analysis
    let analysis = Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/tabular/predict", post(handlers::proxy_tabular_predict))
        .route("/chat/ask", post(handlers::proxy_chat_ask))
        .route("/lightcurve/analyze", post(handlers::proxy_lightcurve_analyze));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .nest("/api", analysis)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
