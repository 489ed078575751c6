//! HTTP Server

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use async_trait::async_trait;
use axum::{extract::Request, Router};
use axum_server::Handle;
use clap::Parser;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, info_span};

use crate::domain::reservations::ReservationService;

use handlers::{api, panic_handler};
use state::{AppState, Environment};

pub mod errors;
pub mod handlers;
pub mod open_api;
pub mod servers;
pub mod state;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct HttpServerConfig {
    /// The port to listen on
    #[arg(short, long, env = "HTTP_PORT", default_value = "3000")]
    pub port: u16,

    /// PEM certificate; TLS is enabled when both this and the key are set
    #[arg(long, env = "TLS_CERT_PATH")]
    pub cert_path: Option<String>,

    /// PEM private key
    #[arg(long, env = "TLS_KEY_PATH")]
    pub key_path: Option<String>,

    /// Directory holding the built website, served for every non-API path
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Deployment environment; error details are only returned in development
    #[arg(long, env = "APP_ENV", default_value = "production")]
    pub environment: Environment,
}

/// A runnable server
#[async_trait]
pub trait Server {
    /// Serves requests until a shutdown signal is received.
    async fn run(self) -> Result<()>;
}

/// Create the application's router
pub fn router<R: ReservationService>(state: AppState<R>) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        let uri = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    let static_dir = state.config.static_dir.clone();

    let router = Router::new().nest("/api", api::router()).with_state(state);

    let router = match static_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    };

    router
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::custom(panic_handler))
        .layer(trace_layer)
}

#[mutants::skip]
async fn shutdown_signal(handle: Option<Handle>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    if let Some(handle) = handle {
        debug!("shutting down gracefully");
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    }
}
