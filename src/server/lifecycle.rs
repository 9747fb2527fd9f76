// ABOUTME: Server lifecycle management: binding, serving, and graceful shutdown
// ABOUTME: Runs the axum server until Ctrl-C or SIGTERM, then closes the database pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use super::http_setup::build_router;
use super::resources::ServerResources;
use crate::errors::{AppError, AppResult};

/// Owns the resources of a running server
pub struct ServerLifecycle {
    resources: Arc<ServerResources>,
}

impl ServerLifecycle {
    /// Create a lifecycle over prepared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Bind the configured address and serve until a shutdown signal
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> AppResult<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {address}: {e}")))?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener until a shutdown signal
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails while running
    pub async fn serve(self, listener: TcpListener) -> AppResult<()> {
        let local = listener
            .local_addr()
            .map_err(|e| AppError::internal(format!("Failed to read listener address: {e}")))?;
        info!("Recipe API listening on http://{local}");

        let router = build_router(Arc::clone(&self.resources));
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))?;

        self.resources.database.close().await;
        info!("Recipe API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => warn!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
