//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual work.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use qtty::{Degrees, Parsecs};
use serde_json::Value;

use super::dto::{
    AnalysisRequest, AnalyzeResponse, CatalogQueryParams, ClassifyRequest, ClassifyResponse,
    ExoplanetListResponse, ExplorerData, ExplorerPlanet, HabitabilityInputs,
    HabitabilityResponse, HealthResponse, ProjectionRequest, ProjectionResponse, SnrInputs,
    SnrResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::characterization::calculate_snr;
use crate::services::classifier::classify;
use crate::services::colors::{category_color, habitability_color};
use crate::services::explorer::{compute_explorer_data, find_planet, query_planets, ExplorerQuery};
use crate::services::habitability::habitability_score;
use crate::services::projection::celestial_to_cartesian;
use crate::services::proxy::ProxyResponse;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Status and raw JSON relayed from the ML backend.
pub type ProxyResult = (StatusCode, Json<Value>);

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
    }))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /v1/exoplanets
///
/// Processed catalog after filters and optional sort.
pub async fn list_exoplanets(
    State(state): State<AppState>,
    params: Result<Query<CatalogQueryParams>, QueryRejection>,
) -> HandlerResult<ExoplanetListResponse> {
    let Query(params) = params?;
    let query = ExplorerQuery::try_from(params)?;

    let exoplanets = query_planets(&state.catalog, &query);
    let total = exoplanets.len();

    Ok(Json(ExoplanetListResponse { exoplanets, total }))
}

/// GET /v1/exoplanets/{id}
///
/// One planet with its derived fields and viewer positions.
pub async fn get_exoplanet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<ExplorerPlanet> {
    let planet = find_planet(&state.catalog, &id, &state.projection)?;
    Ok(Json(planet))
}

/// GET /v1/explorer
///
/// Explorer and 3D viewer payload for the same query as the listing.
pub async fn get_explorer(
    State(state): State<AppState>,
    params: Result<Query<CatalogQueryParams>, QueryRejection>,
) -> HandlerResult<ExplorerData> {
    let Query(params) = params?;
    let query = ExplorerQuery::try_from(params)?;

    let data = compute_explorer_data(&state.catalog, &query, &state.projection)?;
    Ok(Json(data))
}

// =============================================================================
// Calculators
// =============================================================================

/// POST /v1/projection
pub async fn project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> HandlerResult<ProjectionResponse> {
    let Json(request) = payload?;
    let scale_factor = state.projection.resolve(request.scale);

    let position = celestial_to_cartesian(
        Degrees::new(request.ra),
        Degrees::new(request.dec),
        Parsecs::new(request.distance),
        scale_factor,
    )?;

    Ok(Json(ProjectionResponse {
        position,
        scale_factor,
    }))
}

/// POST /v1/habitability
pub async fn score_habitability(
    payload: Result<Json<HabitabilityInputs>, JsonRejection>,
) -> HandlerResult<HabitabilityResponse> {
    let Json(inputs) = payload?;
    let score = habitability_score(&inputs);

    Ok(Json(HabitabilityResponse {
        score,
        color: habitability_color(score).to_string(),
    }))
}

/// POST /v1/classify
pub async fn classify_planet(
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> HandlerResult<ClassifyResponse> {
    let Json(request) = payload?;
    let category = classify(request.radius, request.temperature);

    Ok(Json(ClassifyResponse {
        category,
        color: category_color(category).to_string(),
    }))
}

/// POST /v1/snr
pub async fn estimate_snr(
    payload: Result<Json<SnrInputs>, JsonRejection>,
) -> HandlerResult<SnrResponse> {
    let Json(inputs) = payload?;
    let snr = calculate_snr(&inputs)?;
    Ok(Json(SnrResponse { snr }))
}

// =============================================================================
// Analysis
// =============================================================================

/// POST /api/analyze
///
/// Mock light-curve analysis. Answers after the configured delay.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> HandlerResult<AnalyzeResponse> {
    let Json(request) = payload?;

    if !state.mock_delay.is_zero() {
        tokio::time::sleep(state.mock_delay).await;
    }

    let result = state.analyzer.analyze(&request);
    let response = AnalyzeResponse::new(result);
    tracing::info!(
        analysis_id = %response.analysis_id,
        confidence = response.result.confidence,
        "Mock analysis completed"
    );

    Ok(Json(response))
}

// =============================================================================
// ML backend proxies
// =============================================================================

/// POST /api/tabular/predict
pub async fn proxy_tabular_predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ProxyResult, AppError> {
    let Json(body) = payload?;
    Ok(relay(state.proxy.tabular_predict(&body).await))
}

/// POST /api/chat/ask
pub async fn proxy_chat_ask(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ProxyResult, AppError> {
    let Json(body) = payload?;
    Ok(relay(state.proxy.chat_ask(&body).await))
}

/// POST /api/lightcurve/analyze
pub async fn proxy_lightcurve_analyze(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ProxyResult, AppError> {
    let Json(body) = payload?;
    Ok(relay(state.proxy.lightcurve_analyze(&body).await))
}

fn relay(response: ProxyResponse) -> ProxyResult {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(response.body))
}
