// ABOUTME: SQLite connection pool management and schema migrations for recipe storage
// ABOUTME: Creates the database file on demand and owns the recipes table lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Owns the `SQLite` pool and the schema of the `recipes` table. Migrations
//! are idempotent and run at startup unless `AUTO_MIGRATE=false`.

use std::str::FromStr;

use log::LevelFilter;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    ConnectOptions, SqlitePool,
};
use tokio::fs;
use tracing::{debug, info};

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};

/// Database manager for recipe storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    url: DatabaseUrl,
}

impl Database {
    /// Open (and create if missing) the configured database
    ///
    /// Runs migrations when `config.auto_migrate` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the
    /// connection fails, or a migration fails
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        if let Some(parent) = config
            .url
            .file_path()
            .and_then(|path| path.parent())
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let mut options = SqliteConnectOptions::from_str(&config.url.to_connection_string())
            .map_err(|e| AppError::config(format!("Invalid database URL {}: {e}", config.url)))?
            .create_if_missing(true);
        options = if config.log_statements {
            options.log_statements(LevelFilter::Info)
        } else {
            options.disable_statement_logging()
        };

        // An in-memory database lives exactly as long as its single connection
        let pool_options = if config.url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await.map_err(|e| {
            AppError::database(format!("Failed to connect to {}: {e}", config.url)).with_source(e)
        })?;

        info!(database = %config.url, "Database connection established");

        let db = Self {
            pool,
            url: config.url.clone(),
        };

        if config.auto_migrate {
            db.migrate().await?;
        }

        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Location this database was opened from
    #[must_use]
    pub const fn url(&self) -> &DatabaseUrl {
        &self.url
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_recipes().await?;
        debug!("Database migrations applied");
        Ok(())
    }

    /// Drop everything [`Self::migrate`] created
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn revert_migrations(&self) -> AppResult<()> {
        sqlx::query("DROP INDEX IF EXISTS idx_recipes_created_at")
            .execute(&self.pool)
            .await?;
        sqlx::query("DROP TABLE IF EXISTS recipes")
            .execute(&self.pool)
            .await?;
        info!("Database migrations reverted");
        Ok(())
    }

    /// Check the database answers a trivial query
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create the recipes table
    async fn migrate_recipes(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL CHECK (length(title) BETWEEN 1 AND 200),
                description TEXT NOT NULL CHECK (length(description) BETWEEN 1 AND 500),
                ingredients TEXT NOT NULL,
                instructions TEXT NOT NULL,
                prep_time_minutes INTEGER NOT NULL CHECK (prep_time_minutes >= 1),
                cook_time_minutes INTEGER NOT NULL CHECK (cook_time_minutes >= 1),
                servings INTEGER NOT NULL CHECK (servings >= 1),
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
