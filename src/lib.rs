//! Wuloye AI service.
//!
//! Foundation HTTP service for the Wuloye AI/ML features. At this stage it
//! only exposes a health check, interactive API documentation and request
//! metrics; inference and recommendation endpoints will be mounted on the
//! same router later.
//!
//! ```text
//! GET /api/health  ->  200 {"status": "AI Service Running"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Startup and HTTP error types
//! - [`api`]: Router, handlers, CORS and documentation
//! - [`metrics`]: Prometheus metric names and recording helpers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
