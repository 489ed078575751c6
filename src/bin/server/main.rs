#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Reservation intake server for the restaurant website

use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};

use anyhow::Result;
use clap::Parser;
use omakase_reservations::{
    domain::reservations::ReservationServiceImpl,
    infrastructure::{
        email::{config::VenueConfig, resolver::ConfiguredTransportResolver},
        http::{
            servers::{http::HttpServer, https::HttpsServer},
            state::{AppConfig, AppState},
            HttpServerConfig, Server,
        },
        logging,
    },
};
use tracing::{info, warn};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The restaurant printed on guest confirmations
    #[clap(flatten)]
    pub venue: VenueConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env file is normal outside development.
        if !e.not_found() {
            eprintln!("Failed to load environment: {}", e);

            return Err(e.into());
        }
    }

    logging::init();

    let args = Args::parse();

    let reservations = ReservationServiceImpl::new(
        Arc::new(ConfiguredTransportResolver::from_environment()),
        args.venue.into(),
    );

    let state = AppState::new(AppConfig::from(&args.server), reservations);
    let address = SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), args.server.port);

    info!(
        environment = ?args.server.environment,
        "starting reservation server on {address}"
    );

    match (&args.server.cert_path, &args.server.key_path) {
        (Some(cert_path), Some(key_path)) => {
            HttpsServer::new(address, cert_path, key_path, state)
                .await?
                .run()
                .await
        }
        (None, None) => HttpServer::new(address, state)?.run().await,
        _ => {
            warn!("TLS_CERT_PATH and TLS_KEY_PATH must be set together; serving plain HTTP");

            HttpServer::new(address, state)?.run().await
        }
    }
}
