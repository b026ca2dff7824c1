//! HTTP API route definitions.

use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::cors::cors_layer;
use super::docs::docs_router;
use super::handlers::{health, not_found, render_metrics, AppState};
use crate::config::AllowedOrigins;
use crate::error::ApiError;
use crate::metrics::{record_http_request, UNMATCHED_PATH};

/// Health check path.
pub const HEALTH_PATH: &str = "/api/health";
/// Prometheus exposition path.
pub const METRICS_PATH: &str = "/metrics";

/// Create the API router.
pub fn create_router(state: AppState, origins: &AllowedOrigins) -> Router {
    let router = Router::new()
        .route(HEALTH_PATH, get(health))
        .route(METRICS_PATH, get(render_metrics))
        // Future routers (recommendations, models) are nested here.
        .merge(docs_router());

    let trace_layer = TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        tracing::info_span!(
            "request",
            method = %req.method(),
            uri = %req.uri(),
            version = ?req.version(),
        )
    });

    router
        .fallback(not_found)
        .layer(middleware::from_fn(get_only))
        .layer(middleware::from_fn(track_requests))
        .layer(trace_layer)
        .layer(cors_layer(origins))
        .with_state(state)
}

/// Every route is GET-only: HEAD on a known path and any 405 from a route
/// are answered with the JSON `Method Not Allowed` body.
async fn get_only(request: Request, next: Next) -> Response {
    let matched = request.extensions().get::<MatchedPath>().is_some();
    if matched && request.method() == Method::HEAD {
        return ApiError::MethodNotAllowed.into_response();
    }

    let response = next.run(request).await;
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return ApiError::MethodNotAllowed.into_response();
    }
    response
}

/// Record request count and latency, labelled by the matched route.
async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned());

    let response = next.run(request).await;
    let status = response.status().as_u16();

    record_http_request(start, &method, &path, status);
    info!(
        method = %method,
        path = %path,
        status,
        latency_ms = start.elapsed().as_millis() as u64,
        "finished processing request"
    );

    response
}
