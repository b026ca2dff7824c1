//! HTTP API module: health endpoint, documentation and metrics.

pub mod cors;
pub mod docs;
pub mod handlers;
pub mod routes;

pub use handlers::{AppState, HealthResponse, SERVICE_STATUS};
pub use routes::{create_router, HEALTH_PATH, METRICS_PATH};
