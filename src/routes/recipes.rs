// ABOUTME: Recipe route handlers for validated recipe ingest
// ABOUTME: Parses, validates, and persists POST /api/recipes submissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! The handler is the validation boundary: raw JSON goes through
//! [`validate_submission`] before the service ever sees it.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use serde_json::Value;

use crate::constants::network::API_PREFIX;
use crate::errors::{AppError, ErrorCode};
use crate::logging::AppLogger;
use crate::middleware::RequestId;
use crate::recipes::validate_submission;
use crate::server::ServerResources;

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(&format!("{API_PREFIX}/recipes"), post(Self::handle_create))
            .with_state(resources)
    }

    /// Handle POST /api/recipes - Create a recipe
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        payload: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request_id = request_id.map(|Extension(id)| id.as_str().to_owned());
        let attach = |error: AppError| match &request_id {
            Some(id) => error.with_request_id(id.clone()),
            None => error,
        };

        let Json(payload) = payload.map_err(|rejection| attach(Self::rejection_error(&rejection)))?;

        let submission = validate_submission(&payload).map_err(|errors| {
            AppLogger::log_validation_rejected(errors.violations().len(), &errors.fields());
            attach(AppError::from(errors))
        })?;

        let recipe = resources.recipes.create(submission).await.map_err(attach)?;

        Ok((StatusCode::CREATED, Json(recipe)).into_response())
    }

    /// Map a body extraction failure onto the API error format
    fn rejection_error(rejection: &JsonRejection) -> AppError {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::new(ErrorCode::PayloadTooLarge, rejection.body_text())
        } else {
            AppError::invalid_format(format!(
                "Malformed request body: {}",
                rejection.body_text()
            ))
        }
    }
}
