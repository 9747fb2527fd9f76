// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and a readiness probe that pings the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` answers as long as the process serves requests. `/ready` also
//! requires the database to answer a trivial query; otherwise it answers
//! 503 `RESOURCE_UNAVAILABLE` in the standard error envelope.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::json;
use tracing::warn;

use crate::errors::{AppError, ErrorCode};
use crate::server::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.database.ping().await.map_err(|e| {
            warn!(error = %e, "Readiness check failed");
            AppError::new(ErrorCode::ResourceUnavailable, "Database is not reachable")
                .with_details(json!({
                    "status": "not_ready",
                    "database": "unavailable",
                    "timestamp": Utc::now().to_rfc3339()
                }))
        })?;

        Ok(Json(json!({
            "status": "ready",
            "database": "ok",
            "timestamp": Utc::now().to_rfc3339()
        })))
    }
}
