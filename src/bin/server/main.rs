#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! REST API for validating outbound email payloads

use anyhow::Result;
use clap::Parser;
use payload_validator::{
    domain::communication::payloads::PayloadValidatorImpl,
    infrastructure::http::{AppState, HttpServer, HttpServerConfig, Server},
};
use tracing::warn;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    if let Err(e) = dotenv {
        warn!("No .env file loaded: {}", e);
    }

    let args = Args::parse();

    let state = AppState::new(PayloadValidatorImpl::new());

    HttpServer::new(args.server, state).await?.run().await
}
