//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use serde::Deserialize;

use crate::error::ServiceError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface to bind the HTTP server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Cross-Origin Policy ===
    /// Comma-separated list of allowed origins, or `*` for any origin.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    // === Observability ===
    /// Expose Prometheus metrics at `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format: `text` or `json`.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

/// Origins accepted by the cross-origin layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Any origin is accepted and mirrored back.
    Any,
    /// Only these exact origins are accepted.
    List(Vec<HeaderValue>),
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> String {
    "*".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            metrics_enabled: default_true(),
            rust_log: default_log_level(),
            log_format: default_log_format(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> crate::Result<()> {
        if self.port == 0 {
            return Err(ServiceError::InvalidConfig(
                "PORT must be between 1 and 65535".to_string(),
            ));
        }

        self.socket_addr()?;

        if !matches!(self.log_format.to_ascii_lowercase().as_str(), "text" | "json") {
            return Err(ServiceError::InvalidConfig(format!(
                "LOG_FORMAT must be `text` or `json`, got `{}`",
                self.log_format
            )));
        }

        self.origins()?;

        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> crate::Result<SocketAddr> {
        let ip: IpAddr = self.host.trim().parse().map_err(|_| {
            ServiceError::InvalidConfig(format!("HOST is not an IP address: `{}`", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Parse `allowed_origins` into the policy used by the CORS layer.
    ///
    /// An empty value or any `*` entry means every origin is accepted.
    pub fn origins(&self) -> crate::Result<AllowedOrigins> {
        let entries: Vec<&str> = self
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .collect();

        if entries.is_empty() || entries.contains(&"*") {
            return Ok(AllowedOrigins::Any);
        }

        entries
            .into_iter()
            .map(parse_origin)
            .collect::<Result<Vec<_>, _>>()
            .map(AllowedOrigins::List)
    }

    /// Check if structured JSON logs are requested.
    pub fn is_json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// An origin is `scheme://host[:port]` with nothing after the authority.
fn parse_origin(origin: &str) -> crate::Result<HeaderValue> {
    let invalid = || ServiceError::InvalidOrigin(origin.to_string());

    let authority = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
        .ok_or_else(invalid)?;
    if authority.is_empty() || authority.contains(['/', '?', '#']) {
        return Err(invalid());
    }

    HeaderValue::from_str(origin).map_err(|_| invalid())
}
