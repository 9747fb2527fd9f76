// ABOUTME: Integration tests for the SQLite recipe store and database lifecycle
// ABOUTME: Covers insert/read-back, file-backed persistence, migrations, and failure paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::{create_test_database, init_test_logging, valid_recipe_payload};
use recipe_api::{
    config::{DatabaseConfig, DatabaseUrl},
    database::Database,
    errors::ErrorCode,
    recipes::{validate_submission, NewRecipe, RecipeStore, RecipeSubmission, SqliteRecipeStore},
};
use tempfile::TempDir;
use uuid::Uuid;

fn submission() -> RecipeSubmission {
    validate_submission(&valid_recipe_payload()).unwrap()
}

fn file_config(dir: &TempDir) -> DatabaseConfig {
    DatabaseConfig {
        url: DatabaseUrl::SQLite {
            path: dir.path().join("nested").join("recipes.db"),
        },
        ..DatabaseConfig::default()
    }
}

#[tokio::test]
async fn test_insert_returns_stored_record() {
    let database = create_test_database().await.unwrap();
    let store = SqliteRecipeStore::new(database.pool().clone());
    let before = Utc::now();

    let new_recipe = NewRecipe::new(submission());
    let stored = store.insert(&new_recipe).await.unwrap();

    assert_eq!(stored.id, new_recipe.id);
    assert_eq!(stored.submission(), new_recipe.submission);
    // Column default is millisecond precision
    assert!(stored.created_at >= before - Duration::milliseconds(1));
    assert!(stored.created_at <= Utc::now());
}

#[tokio::test]
async fn test_find_by_id_reads_back_identical_fields() {
    let database = create_test_database().await.unwrap();
    let store = SqliteRecipeStore::new(database.pool().clone());

    let stored = store.insert(&NewRecipe::new(submission())).await.unwrap();
    let found = store.find_by_id(stored.id).await.unwrap();
    assert_eq!(found, Some(stored));

    let missing = store.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_file_database_creates_directory_and_persists() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir);

    let id = {
        let database = Database::new(&config).await.unwrap();
        let store = SqliteRecipeStore::new(database.pool().clone());
        let stored = store.insert(&NewRecipe::new(submission())).await.unwrap();
        database.close().await;
        stored.id
    };
    assert!(dir.path().join("nested").join("recipes.db").exists());

    let reopened = Database::new(&config).await.unwrap();
    let store = SqliteRecipeStore::new(reopened.pool().clone());
    let found = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.submission(), submission());
}

#[tokio::test]
async fn test_migrations_are_idempotent_and_reversible() {
    let database = create_test_database().await.unwrap();
    database.migrate().await.unwrap();
    database.migrate().await.unwrap();

    database.revert_migrations().await.unwrap();
    let store = SqliteRecipeStore::new(database.pool().clone());
    let error = store.insert(&NewRecipe::new(submission())).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::DatabaseError);
    assert_eq!(error.message, "Failed to create recipe");

    database.migrate().await.unwrap();
    assert!(store.insert(&NewRecipe::new(submission())).await.is_ok());
}

#[tokio::test]
async fn test_auto_migrate_disabled_leaves_schema_empty() {
    init_test_logging();
    let config = DatabaseConfig {
        auto_migrate: false,
        ..DatabaseConfig::in_memory()
    };
    let database = Database::new(&config).await.unwrap();

    let store = SqliteRecipeStore::new(database.pool().clone());
    assert!(store.find_by_id(Uuid::new_v4()).await.is_err());
}

#[tokio::test]
async fn test_ping_fails_after_close() {
    let database = create_test_database().await.unwrap();
    database.ping().await.unwrap();

    database.close().await;
    assert!(database.ping().await.is_err());
}
