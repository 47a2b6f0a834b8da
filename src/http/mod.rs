//! HTTP surface: routes, handlers, the admin guard and error responses.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

use std::io;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Serves `state` on `address` until the process receives Ctrl+C.
///
/// # Errors
///
/// Returns an [`io::Error`] when the address cannot be bound.
pub async fn serve(address: &str, state: AppState) -> io::Result<()> {
    let listener = TcpListener::bind(address).await?;
    info!(address = %listener.local_addr()?, "listening");

    tokio::select! {
        result = axum::serve(listener, build_router(state)) => {
            if let Err(err) = result {
                warn!(error = %err, "server ended unexpectedly");
                return Err(err);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("received ctrl+c, shutting down");
        }
    }
    Ok(())
}
