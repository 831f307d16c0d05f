//! HTTP demo service entry point.
//!
//! Reads `PORT` and `API_KEY` from the environment, binds a listener, and
//! serves the greeting endpoint until terminated. Configuration is validated
//! eagerly: a missing API key fails the process at startup with a
//! descriptive diagnostic instead of faulting inside the request handler.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use demo_service::config::AppConfig;
use demo_service::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("demo-service v0.1.0 starting");

    // Load and validate configuration before binding anything.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        port = config.port,
        api_key_length = config.api_key.chars().count(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    let server = HttpServer::new(config);
    server.run(listener).await?;

    Ok(())
}
