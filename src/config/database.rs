// ABOUTME: Database configuration types for SQLite connections
// ABOUTME: Resolves the database location from DATABASE_URL or NODE_ENV and pool settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::parse_env_or;
use crate::constants::database;
use crate::errors::{AppError, AppResult};

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the URL names a database backend other than `SQLite`
    pub fn parse_url(s: &str) -> AppResult<Self> {
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else if path_str.is_empty() {
                Err(AppError::config("DATABASE_URL has an empty SQLite path"))
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.contains("://") {
            Err(AppError::config(format!(
                "Unsupported database URL scheme: {s}"
            )))
        } else {
            // Fallback: treat as SQLite file path
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => database::MEMORY_DATABASE_URL.into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Path of the database file, if any
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::SQLite { path } => Some(path),
            Self::Memory => None,
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(database::DEFAULT_DATABASE_PATH),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection and management configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Run migrations on startup
    pub auto_migrate: bool,
    /// Log every SQL statement at debug level
    pub log_statements: bool,
    /// Maximum number of pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            auto_migrate: true,
            log_statements: false,
            max_connections: database::DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for an in-memory database with migrations enabled
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: DatabaseUrl::Memory,
            ..Self::default()
        }
    }

    /// Load database configuration from environment
    ///
    /// `DATABASE_URL` wins when set. Otherwise `NODE_ENV=test` selects an
    /// in-memory database and every other environment uses the default file.
    ///
    /// # Errors
    ///
    /// Returns an error if database environment variables are invalid
    pub fn from_env() -> AppResult<Self> {
        let url = match env::var("DATABASE_URL") {
            Ok(raw) if !raw.trim().is_empty() => DatabaseUrl::parse_url(raw.trim())?,
            _ if env::var("NODE_ENV").as_deref() == Ok("test") => DatabaseUrl::Memory,
            _ => DatabaseUrl::default(),
        };

        Ok(Self {
            url,
            auto_migrate: parse_env_or("AUTO_MIGRATE", true)?,
            log_statements: parse_env_or("DB_LOGGING", false)?,
            max_connections: parse_env_or(
                "DB_MAX_CONNECTIONS",
                database::DEFAULT_MAX_CONNECTIONS,
            )?,
        })
    }
}
