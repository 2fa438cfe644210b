// ---------------------------------------------------------------------------
// Route registration + handlers
// ---------------------------------------------------------------------------

use axum::Json;
use axum::Router;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;

use cvsskit_types::{CvssVector, ScoreResult, VectorError};

use crate::error::ApiError;

pub fn build_router() -> Router {
    // The API holds no credentials and mutates nothing, so cross-origin
    // callers (scoring forms served from anywhere) are allowed.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/api/system/health", get(health_check))
        .route("/api/score", post(score))
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(16 * 1024)) // metric payloads are tiny
}

// ---------------------------------------------------------------------------
// GET /api/system/health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check endpoint — intentionally minimal.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
    })
}

// ---------------------------------------------------------------------------
// POST /api/score — score one set of base metrics
// ---------------------------------------------------------------------------

/// Raw metric codes as submitted by the caller.
///
/// Every field is optional so a missing axis surfaces as a typed
/// validation error with the axis name, not as deserialization noise.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub av: Option<String>,
    pub ac: Option<String>,
    pub pr: Option<String>,
    pub ui: Option<String>,
    pub s: Option<String>,
    pub c: Option<String>,
    pub i: Option<String>,
    pub a: Option<String>,
}

async fn score(Json(req): Json<ScoreRequest>) -> Result<Json<ScoreResult>, ApiError> {
    let vector = CvssVector::from_codes(
        req.av.as_deref(),
        req.ac.as_deref(),
        req.pr.as_deref(),
        req.ui.as_deref(),
        req.s.as_deref(),
        req.c.as_deref(),
        req.i.as_deref(),
        req.a.as_deref(),
    )
    .map_err(|e| match e {
        VectorError::InvalidVector { .. } => ApiError::BadRequest(e.to_string()),
        VectorError::UnknownMetricCode { .. } => ApiError::UnknownMetric(e.to_string()),
    })?;

    let result = cvsskit_core::score(&vector);
    info!(
        vector = %result.vector_string,
        base_score = result.base_score,
        "scored vector"
    );

    Ok(Json(result))
}
