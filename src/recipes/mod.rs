// ABOUTME: Recipe ingest domain: models, validation, storage seam, and service
// ABOUTME: Re-exports the types used by the HTTP layer and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes
//!
//! A submission flows through [`validation::validate_submission`], then
//! [`service::RecipeService::create`], which stores it through a
//! [`repository::RecipeStore`].

/// Recipe data models
pub mod models;
/// Storage trait and `SQLite` store
pub mod repository;
/// Ingest service
pub mod service;
/// Submission validation
pub mod validation;

pub use models::{Ingredient, NewRecipe, Recipe, RecipeSubmission};
pub use repository::{RecipeStore, SqliteRecipeStore};
pub use service::RecipeService;
pub use validation::{validate_submission, ConstraintKind, ValidationErrors, Violation};
