// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging, in-memory database, server resources, and payload helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `recipe_api`

use std::env;
use std::sync::{Arc, Once};

use anyhow::Result;
use axum::Router;
use recipe_api::{
    config::{DatabaseConfig, ServerConfig},
    database::Database,
    recipes::RecipeStore,
    server::{build_router, ServerResources},
};
use serde_json::{json, Value};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard test database setup (in-memory, migrated)
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new(&DatabaseConfig::in_memory()).await?)
}

/// Server configuration pointing at an in-memory database
pub fn test_server_config() -> ServerConfig {
    ServerConfig {
        environment: "test".to_owned(),
        database: DatabaseConfig::in_memory(),
        ..ServerConfig::default()
    }
}

/// Server resources over a fresh in-memory database
pub async fn create_test_server_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        Arc::new(test_server_config()),
    )))
}

/// Server resources with a caller-supplied store
pub async fn create_test_server_resources_with_store(
    store: Arc<dyn RecipeStore>,
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::with_store(
        database,
        store,
        Arc::new(test_server_config()),
    )))
}

/// Full application router over fresh resources
pub async fn create_test_app() -> Result<(Router, Arc<ServerResources>)> {
    let resources = create_test_server_resources().await?;
    Ok((build_router(Arc::clone(&resources)), resources))
}

/// A submission that passes every constraint
pub fn valid_recipe_payload() -> Value {
    json!({
        "title": "Spaghetti Carbonara",
        "description": "Classic Roman pasta with eggs, cheese, and guanciale",
        "ingredients": [
            {"name": "spaghetti", "quantity": 400.0, "unit": "g"},
            {"name": "guanciale", "quantity": 150.0, "unit": "g"},
            {"name": "egg yolk", "quantity": 4.0, "unit": "pcs"}
        ],
        "instructions": [
            "Boil the pasta in salted water",
            "Crisp the guanciale",
            "Toss everything off the heat with the yolks"
        ],
        "prepTimeMinutes": 10,
        "cookTimeMinutes": 15,
        "servings": 4
    })
}
