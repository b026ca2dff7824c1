//! HTTP API handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;

/// Status reported by the health endpoint.
pub const SERVICE_STATUS: &str = "AI Service Running";

/// Application state shared with handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Prometheus render handle; `/metrics` answers 404 when unset.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state without metrics exposition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a Prometheus handle.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "AI Service Running".
    #[schema(example = "AI Service Running")]
    pub status: &'static str,
}

/// Returns the operational status of the AI service.
///
/// Used by container health checks and the backend service.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: SERVICE_STATUS,
    })
}

/// Prometheus exposition handler.
///
/// Metrics can be disabled by config, in which case the route reports 404.
pub async fn render_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => ApiError::NotFound.into_response(),
    }
}

/// Fallback for paths with no route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
