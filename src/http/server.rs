//! HTTP server setup and the greeting handler.
//!
//! # Responsibilities
//! - Create the Axum Router with the single `GET /` handler
//! - Wire up middleware (request tracing)
//! - Bind the server to a listener and serve until terminated
//!
//! # Design Decisions
//! - The handler consumes nothing from the request: no query parameters,
//!   headers, or body. Each request is handled statelessly; the only state
//!   consulted is the immutable startup configuration.
//! - `run` takes a pre-bound listener so tests can bind port 0 and discover
//!   the ephemeral port.

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

/// HTTP server for the demo application.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState {
            config: Arc::new(config.clone()),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(greeting_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            url = %format!("http://localhost:{}", addr.port()),
            "App running"
        );

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Greeting handler for `GET /`.
///
/// Responds with a plain-text greeting carrying the character length of the
/// configured API key. The key itself is never echoed.
async fn greeting_handler(State(state): State<AppState>) -> String {
    format!(
        "Hello DevSecOps! (demo key length: {})",
        state.config.api_key.chars().count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_key(key: &str) -> AppState {
        AppState {
            config: Arc::new(AppConfig {
                port: 5000,
                api_key: key.to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn test_greeting_includes_key_length() {
        let body = greeting_handler(State(state_with_key("abcdef12"))).await;
        assert_eq!(body, "Hello DevSecOps! (demo key length: 8)");
    }

    #[tokio::test]
    async fn test_empty_key_has_length_zero() {
        let body = greeting_handler(State(state_with_key(""))).await;
        assert_eq!(body, "Hello DevSecOps! (demo key length: 0)");
    }

    #[tokio::test]
    async fn test_key_length_counts_characters_not_bytes() {
        // "héllo" is 5 characters but 6 bytes in UTF-8.
        let body = greeting_handler(State(state_with_key("héllo"))).await;
        assert_eq!(body, "Hello DevSecOps! (demo key length: 5)");
    }
}
