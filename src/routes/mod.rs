// ABOUTME: Route module organization for the recipe API HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers over services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Recipe API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Recipe ingest routes
pub mod recipes;

pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
