//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (CORS, timeout, tracing, body limits)
//! - Bind the server to a listener and serve until shutdown

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{LimitsConfig, ServerConfig};
use crate::lifecycle::signals;
use crate::upload::handler::upload_files;
use crate::upload::UploadStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: UploadStore,
    pub limits: LimitsConfig,
}

/// HTTP server for the upload service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only when the configured CORS origin is not a valid header
    /// value, which config validation normally catches earlier.
    pub fn new(config: ServerConfig, store: UploadStore) -> Result<Self, InvalidHeaderValue> {
        let state = AppState {
            store,
            limits: config.limits.clone(),
        };

        let router = Self::build_router(&config, state)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Result<Router, InvalidHeaderValue> {
        let origin: HeaderValue = config.cors.allowed_origin.parse()?;

        // One configured origin; every method and header is allowed from
        // it and credentials may be sent.
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true);

        Ok(Router::new()
            .route("/upload", post(upload_files))
            .route("/health", get(health))
            .with_state(state)
            // No file-size limit is enforced on uploads
            .layer(DefaultBodyLimit::disable())
            .layer(cors)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http()))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until an OS termination signal arrives or the given shutdown
    /// channel fires, whichever comes first.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Resolve when either an OS signal or a programmatic shutdown arrives.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = signals::wait_for_termination() => {}
        _ = shutdown.recv() => {
            tracing::info!("Programmatic shutdown requested");
        }
    }
}
