//! # gzrelay: webhook gzip relay
//!
//! `gzrelay` is a single-endpoint HTTP relay. It receives a webhook notification
//! containing a source file URL and a record identifier, downloads the referenced
//! file, gzip-compresses it, re-uploads the compressed artifact to an anonymous
//! file-hosting service, and writes the resulting public URL back into a record
//! in a tabular data store via that store's REST API.
//!
//! ## Request flow
//!
//! A `POST /webhook` runs a strictly ordered pipeline — validate, fetch,
//! compress, upload, record update — where any stage failure aborts the run and
//! converts into a uniform JSON error envelope at the boundary. All values are
//! request-scoped; concurrent requests share nothing but the configuration and
//! one HTTP client. There are no retries: a failed request must be resubmitted
//! by the caller.
//!
//! `GET /health` is an unconditional liveness check, and the rendered OpenAPI
//! docs are served at `/docs`.
//!
//! ## Quick start
//!
//! ```no_run
//! use clap::Parser;
//! use gzrelay::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = gzrelay::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     gzrelay::telemetry::init_telemetry()?;
//!
//!     Application::new(config)?
//!         .serve(async {
//!             tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!         })
//!         .await
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod errors;
mod openapi;
pub mod relay;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use axum::{
    Router,
    routing::{get, post},
};
use bon::Builder;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use config::Config;
use openapi::ApiDoc;

/// Application state shared across all request handlers.
///
/// Holds the configuration (constructed once at startup and injected, never
/// read ad hoc mid-request) and one shared HTTP client for all outbound calls.
#[derive(Clone, Builder)]
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}

/// Build the outbound HTTP client with the configured timeout
fn build_http_client(config: &Config) -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(config.request_timeout).build()?)
}

/// Build the application router: webhook + liveness routes, OpenAPI docs,
/// and tracing middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(api::handlers::relay::relay_webhook))
        .route("/health", get(api::handlers::probes::health))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Main application struct that owns the router and serving lifecycle.
pub struct Application {
    router: Router,
    config: Config,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = build_http_client(&config)?;
        let state = AppState::builder().config(config.clone()).http(http).build();
        let router = build_router(state);
        Ok(Self { router, config })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("gzrelay listening on http://{}", bind_addr);

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}
