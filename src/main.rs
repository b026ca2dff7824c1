//! Wuloye AI service entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wuloye_ai_service::api::{create_router, AppState};
use wuloye_ai_service::config::{AllowedOrigins, Config};
use wuloye_ai_service::metrics;
use wuloye_ai_service::utils::{bind_listener, shutdown_signal};

/// Wuloye AI service.
#[derive(Parser, Debug)]
#[command(name = "wuloye-ai-service")]
#[command(about = "Microservice for Wuloye AI/ML features")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default).
    Serve {
        /// Interface to bind (overrides HOST).
        #[arg(long)]
        host: Option<String>,

        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Configuration is loaded before logging so LOG_FORMAT can take effect
    let config = Config::load();
    let verbose = args.verbose || config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let json = config.as_ref().map(Config::is_json_logs).unwrap_or(false);
    let level = config.as_ref().map(|c| c.rust_log.as_str()).unwrap_or("info");
    init_logging(verbose, level, json);

    let config = config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve { host, port }) => cmd_serve(config, host, port).await,
        None => cmd_serve(config, None, None).await,
    }
}

/// Initialize the global tracing subscriber.
fn init_logging(verbose: bool, level: &str, json: bool) {
    let filter = if verbose {
        EnvFilter::new("wuloye_ai_service=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("WULOYE AI SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.host, config.port);
    match config.origins()? {
        AllowedOrigins::Any => {
            println!("  Allowed Origins: * (any, credentials allowed)");
            println!("  WARNING: set ALLOWED_ORIGINS before deploying to production");
        }
        AllowedOrigins::List(list) => {
            println!("  Allowed Origins:");
            for origin in list {
                println!("    - {}", origin.to_str().unwrap_or("<non-ascii>"));
            }
        }
    }
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("  Log Format: {}", config.log_format);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Serve the HTTP API until a shutdown signal arrives.
async fn cmd_serve(
    mut config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    // Override with CLI args if provided
    if let Some(host) = host_override {
        config.host = host;
    }
    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let origins = config.origins()?;
    if origins == AllowedOrigins::Any {
        warn!("CORS accepts any origin with credentials; set ALLOWED_ORIGINS in production");
    }

    // Create app state
    let mut app_state = AppState::new();
    if config.metrics_enabled {
        let handle = metrics::install_recorder()?;
        metrics::init_metrics();
        app_state = app_state.with_metrics(handle);
    }

    let router = create_router(app_state, &origins);

    // Start HTTP server
    let addr = config.socket_addr()?;
    let listener = bind_listener(addr).await?;
    info!("HTTP server listening on {}", addr);
    info!("API docs available at http://{}/docs and /redoc", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
