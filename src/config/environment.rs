// ABOUTME: Environment-based server configuration for the Recipe API
// ABOUTME: Loads bind address, database, CORS, and HTTP limits from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration.
//!
//! There are no configuration files; every setting comes from an environment
//! variable with a default, and the binary can override a few from the CLI.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::{env_var_or, parse_env_or};
use crate::constants::network;
use crate::errors::{AppError, AppResult};

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// HTTP layer limits applied outside the ingest core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpLimits {
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            request_timeout_secs: network::DEFAULT_REQUEST_TIMEOUT_SECS,
            max_body_bytes: network::DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl HttpLimits {
    /// Request timeout as a [`Duration`]
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment name (development, test, production)
    pub environment: String,
    /// Database settings
    pub database: DatabaseConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// HTTP layer limits
    pub http: HttpLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_HOST.to_owned(),
            http_port: network::DEFAULT_HTTP_PORT,
            environment: "development".to_owned(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
            http: HttpLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("PORT").or_else(|_| env::var("HTTP_PORT")) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::config(format!("Invalid PORT value '{raw}': {e}")))?,
            Err(_) => network::DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            host: env_var_or("HOST", network::DEFAULT_HOST),
            http_port,
            environment: env::var("ENVIRONMENT")
                .or_else(|_| env::var("NODE_ENV"))
                .unwrap_or_else(|_| "development".into()),
            database: DatabaseConfig::from_env()?,
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            http: HttpLimits {
                request_timeout_secs: parse_env_or(
                    "REQUEST_TIMEOUT_SECS",
                    network::DEFAULT_REQUEST_TIMEOUT_SECS,
                )?,
                max_body_bytes: parse_env_or("MAX_BODY_BYTES", network::DEFAULT_MAX_BODY_BYTES)?,
            },
        })
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe API Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Auto Migrate: {}\n\
             - SQL Logging: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Max Body: {} bytes",
            self.bind_address(),
            self.environment,
            self.database.url,
            self.database.auto_migrate,
            self.database.log_statements,
            self.cors.allowed_origins,
            self.http.request_timeout_secs,
            self.http.max_body_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.http.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.cors.allowed_origins, "*");
    }

    #[test]
    fn test_summary_mentions_database() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("sqlite:./data/recipe-api.db"));
        assert!(summary.contains("127.0.0.1:3000"));
    }
}
