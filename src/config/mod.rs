// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Groups environment-derived server settings and database location rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the Recipe API
//!
//! - **Environment**: Server configuration from environment variables
//! - **Database**: Database location, migration, and pool settings

/// Database location and pool configuration
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::ServerConfig;

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

/// Read `key`, falling back to `default` when unset
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse `key` when set; an unparseable value is a configuration error
pub(crate) fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
