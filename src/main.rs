//! Binary entry point.
//!
//! Reads `POPLOOKUP_*` configuration, installs tracing and serves the page
//! until Ctrl+C or SIGTERM.
//!
//! # Startup
//!
//! 1. **Config**: [`Config::from_env`] with defaults for every key
//! 2. **Tracing**: stderr logs, plus OTLP JSON export when `trace_file` is set
//! 3. **Serve**: bind `host:port` and hand requests to the router

#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use poplookup::observability::init_tracing;
use poplookup::server::start_server;
use poplookup::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();
    init_tracing(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %config.bind_address(),
        "starting poplookup"
    );

    match start_server(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server exited with an error");
            ExitCode::FAILURE
        }
    }
}
