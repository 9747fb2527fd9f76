// ABOUTME: Recipe ingest service turning validated submissions into stored records
// ABOUTME: Assigns identifiers, delegates persistence to a RecipeStore, and logs outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use super::models::{NewRecipe, Recipe, RecipeSubmission};
use super::repository::RecipeStore;
use crate::constants::database::RECIPES_TABLE;
use crate::errors::AppResult;
use crate::logging::AppLogger;

/// Ingest operations over an injected [`RecipeStore`]
#[derive(Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
}

impl RecipeService {
    /// Create a service backed by `store`
    #[must_use]
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Persist a validated submission
    ///
    /// The submission is trusted as-is; callers validate at the boundary.
    ///
    /// # Errors
    ///
    /// Returns the store's error unchanged when persistence fails
    pub async fn create(&self, submission: RecipeSubmission) -> AppResult<Recipe> {
        let recipe = NewRecipe::new(submission);
        let started = Instant::now();
        let stored = self.store.insert(&recipe).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match stored {
            Ok(stored) => {
                AppLogger::log_database_operation("insert", RECIPES_TABLE, true, duration_ms);
                AppLogger::log_recipe_created(
                    &stored.id.to_string(),
                    stored.ingredients.len(),
                    duration_ms,
                );
                Ok(stored)
            }
            Err(e) => {
                AppLogger::log_database_operation("insert", RECIPES_TABLE, false, duration_ms);
                Err(e)
            }
        }
    }

    /// Fetch a stored recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the store lookup fails
    pub async fn get(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        self.store.find_by_id(id).await
    }
}
