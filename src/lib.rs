// ABOUTME: Main library entry point for the Recipe API
// ABOUTME: Provides validated recipe ingest over HTTP backed by SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe API
//!
//! A small HTTP service that accepts recipe submissions, validates every
//! field against a declarative constraint table, and stores accepted
//! recipes in `SQLite`.
//!
//! ## Architecture
//!
//! - **Recipes**: models, validation, storage seam, and ingest service
//! - **Routes**: thin axum handlers over the service layer
//! - **Database**: pool management and migrations
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_api::config::environment::ServerConfig;
//! use recipe_api::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Recipe API configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Application constants and configuration defaults
pub mod constants;

/// Database pool and migrations
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Structured logging setup and domain log helpers
pub mod logging;

/// HTTP middleware (request IDs, CORS)
pub mod middleware;

/// Recipe domain: models, validation, storage, and service
pub mod recipes;

/// HTTP route handlers
pub mod routes;

/// Server resources, router assembly, and lifecycle
pub mod server;
