//! HTTP host for the page.
//!
//! Routes:
//!
//! - `GET /` → page in light mode
//! - `GET /dark-mode` → page in dark mode
//! - `GET /healthz` → liveness check
//! - anything else → `404`
//!
//! Both page routes accept `q` (search text) and `modal=open`.

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::error::Result;
use crate::Config;

pub use error::AppError;
pub use routes::PageParams;
pub use state::AppContext;

use routes::{health_handler, not_found_handler, page_handler};

/// Builds the application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/dark-mode", get(page_handler))
        .route("/healthz", get(health_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the context cannot be built, the address cannot be
/// bound or the server fails while running.
pub async fn start_server(config: &Config) -> Result<()> {
    info!("Initializing state...");
    let ctx = AppContext::from_config(config)?;

    let address = config.bind_address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
