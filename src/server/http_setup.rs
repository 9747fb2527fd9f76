// ABOUTME: HTTP route configuration and middleware stack for the recipe API
// ABOUTME: Merges route modules and applies tracing, CORS, timeout, body limit, and request IDs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # HTTP Route Setup Module
//!
//! Layers are listed innermost first; the request ID layer is outermost so
//! every log line and error body inside the stack can see the ID.
//! The body limit is enforced by the body extractors, so oversized bodies
//! reach the handler as a rejection and leave in the JSON error envelope.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::resources::ServerResources;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::routes::{HealthRoutes, RecipeRoutes};

/// Build the complete application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(resources))
        .layer(DefaultBodyLimit::max(config.http.max_body_bytes))
        .layer(TimeoutLayer::new(config.http.request_timeout()))
        .layer(setup_cors(&config.cors))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}
