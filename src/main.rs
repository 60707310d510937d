//! POC3 demo API entry point.
//!
//! Parses command line arguments, loads configuration from a TOML file,
//! initializes tracing, sets up the Axum router, and starts the HTTP server
//! with graceful shutdown.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use poc3_api::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use poc3_api::routes::create_router;
use poc3_api::server::start_server;
use poc3_api::state::AppState;

/// POC3 hello-world demonstration API
#[derive(Parser, Debug)]
#[command(name = "poc3-api", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "poc3_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration (defaults apply when the file is absent)
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        application = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        "Loaded configuration"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server (blocks until shutdown)
    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
