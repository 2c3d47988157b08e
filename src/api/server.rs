//! Server lifecycle — bind, spawn, graceful shutdown.
//!
//! Pattern: bind → spawn background task → return handle with shutdown
//! channel.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use tokio::sync::oneshot;

use crate::api::router::intake_router;

/// Handle to a running intake server.
pub struct IntakeServer {
    pub local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: tokio::task::JoinHandle<()>,
}

impl IntakeServer {
    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    /// Shut down the server gracefully. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Intake server shutdown signal sent");
        }
    }

    /// Wait for the server task to finish draining in-flight requests.
    /// Call after `shutdown`; returns once the listener has closed.
    pub async fn wait_until_stopped(self) {
        if let Err(e) = self.task.await {
            tracing::error!("Intake server task failed: {e}");
        }
    }
}

/// Start the intake server on all interfaces at the given port.
pub async fn start_server(db_path: PathBuf, port: u16) -> Result<IntakeServer, String> {
    start_server_on(
        db_path,
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
    )
    .await
}

/// Start the intake server on a specific address.
///
/// Factored out from `start_server` so tests can bind `127.0.0.1:0`
/// and read the assigned port back from the handle.
pub async fn start_server_on(
    db_path: PathBuf,
    addr: SocketAddr,
) -> Result<IntakeServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind intake server: {e}"))?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    tracing::info!(%local_addr, "Intake server binding");

    let app = intake_router(db_path);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Intake server received shutdown signal");
        };

        tracing::info!(%local_addr, "Intake server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Intake server error: {e}");
        }

        tracing::info!("Intake server stopped");
    });

    Ok(IntakeServer {
        local_addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}
