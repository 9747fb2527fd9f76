// ABOUTME: Centralized resource container for dependency injection into route handlers
// ABOUTME: Holds the database, the recipe service, and the server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Shared resources are built once at startup and handed to every route
//! module behind an `Arc`.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::database::Database;
use crate::recipes::{RecipeService, RecipeStore, SqliteRecipeStore};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Database handle, used directly by readiness checks
    pub database: Arc<Database>,
    /// Recipe ingest service
    pub recipes: RecipeService,
    /// Effective server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create resources backed by the `SQLite` recipe store
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let store = Arc::new(SqliteRecipeStore::new(database.pool().clone()));
        Self::with_store(database, store, config)
    }

    /// Create resources with a caller-supplied recipe store
    #[must_use]
    pub fn with_store(
        database: Database,
        store: Arc<dyn RecipeStore>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            database: Arc::new(database),
            recipes: RecipeService::new(store),
            config,
        }
    }
}
