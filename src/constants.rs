// ABOUTME: System-wide constants and configuration defaults for the Recipe API
// ABOUTME: Holds field bounds, service names, network defaults, and database defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants grouped by domain. Values that can be overridden at
//! runtime are read in [`crate::config`]; this module only holds the defaults.

/// Recipe field bounds enforced by the validation layer
pub mod recipe_limits {
    /// Minimum title length in characters
    pub const TITLE_MIN_LEN: usize = 1;
    /// Maximum title length in characters
    pub const TITLE_MAX_LEN: usize = 200;
    /// Minimum description length in characters
    pub const DESCRIPTION_MIN_LEN: usize = 1;
    /// Maximum description length in characters
    pub const DESCRIPTION_MAX_LEN: usize = 500;
    /// Minimum number of ingredients
    pub const MIN_INGREDIENTS: usize = 1;
    /// Minimum number of instructions
    pub const MIN_INSTRUCTIONS: usize = 1;
    /// Smallest accepted ingredient quantity
    pub const MIN_QUANTITY: f64 = 0.01;
    /// Smallest accepted value for prep time, cook time, and servings
    pub const MIN_POSITIVE_INT: i64 = 1;
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name reported in logs
    pub const RECIPE_API: &str = "recipe-api";
}

/// Network defaults
pub mod network {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
    /// Global path prefix for the API routes
    pub const API_PREFIX: &str = "/api";
    /// Default request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default maximum accepted request body in bytes
    pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
    /// Header carrying the request correlation ID
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Database defaults
pub mod database {
    /// Default on-disk database location
    pub const DEFAULT_DATABASE_PATH: &str = "./data/recipe-api.db";
    /// In-memory database URL
    pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";
    /// Default connection pool size
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    /// Table holding persisted recipes
    pub const RECIPES_TABLE: &str = "recipes";
}
