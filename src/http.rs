//! Router factory and request handlers.
//!
//! The router is built from an explicit [`AppState`] rather than module-level
//! globals; the state is shared read-only across requests.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::CorsLayer;

use appraise_core::Estimator;
use appraise_types::{EstimateError, ScoreRequest, ScoreResponse};

/// Shared per-process state. The estimator is stateless across requests, so
/// concurrent handlers borrow it freely.
#[derive(Debug)]
pub struct AppState {
    pub estimator: Estimator,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            estimator: Estimator::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the service router: the estimate endpoint, a liveness probe, and
/// permissive CORS (any origin).
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/estimate-authenticity", post(estimate_authenticity))
        .route("/health", get(health))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Wire-level rendering of [`EstimateError`].
#[derive(Debug)]
pub struct ApiError(pub EstimateError);

impl From<EstimateError> for ApiError {
    fn from(err: EstimateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(err) = self;
        let status = match err {
            EstimateError::MissingPayload => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": err.to_string() }))).into_response()
    }
}

async fn estimate_authenticity(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ScoreResponse>, ApiError> {
    let request = parse_payload(&body)?;
    Ok(Json(state.estimator.estimate(&request)))
}

/// An absent or unparseable body is the one rejected input. An empty JSON
/// object is valid and falls through to the defaults.
fn parse_payload(body: &[u8]) -> Result<ScoreRequest, EstimateError> {
    if body.is_empty() {
        return Err(EstimateError::MissingPayload);
    }
    serde_json::from_slice(body).map_err(|_| EstimateError::MissingPayload)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
