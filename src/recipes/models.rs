// ABOUTME: Data models for recipe ingest: ingredients, normalized submissions, and stored records
// ABOUTME: Defines Ingredient, RecipeSubmission, NewRecipe, and the persisted Recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ingredient line of a recipe
///
/// Ingredients have no identity of their own; two ingredients are equal when
/// all three fields are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name (non-empty)
    pub name: String,
    /// Amount in `unit`, at least 0.01; always serialized as a float (`2` becomes `2.0`)
    pub quantity: f64,
    /// Measurement unit (non-empty)
    pub unit: String,
}

/// A submission that passed validation, with values coerced to their field types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSubmission {
    /// Recipe title (1-200 characters)
    pub title: String,
    /// Recipe description (1-500 characters)
    pub description: String,
    /// Ordered ingredient list, never empty
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps, never empty
    pub instructions: Vec<String>,
    /// Preparation time in minutes (>= 1)
    pub prep_time_minutes: i64,
    /// Cooking time in minutes (>= 1)
    pub cook_time_minutes: i64,
    /// Number of servings (>= 1)
    pub servings: i64,
}

/// A submission with its freshly assigned identifier, ready for storage
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    /// Identifier assigned at creation
    pub id: Uuid,
    /// Submitted fields, copied verbatim
    pub submission: RecipeSubmission,
}

impl NewRecipe {
    /// Wrap a submission with a new random (v4) identifier
    #[must_use]
    pub fn new(submission: RecipeSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            submission,
        }
    }
}

/// A persisted recipe exactly as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier
    pub id: Uuid,
    /// Recipe title
    pub title: String,
    /// Recipe description
    pub description: String,
    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
    /// Preparation time in minutes
    pub prep_time_minutes: i64,
    /// Cooking time in minutes
    pub cook_time_minutes: i64,
    /// Number of servings
    pub servings: i64,
    /// Creation timestamp assigned by storage
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Fields of this record as the submission that produced it
    #[must_use]
    pub fn submission(&self) -> RecipeSubmission {
        RecipeSubmission {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            prep_time_minutes: self.prep_time_minutes,
            cook_time_minutes: self.cook_time_minutes,
            servings: self.servings,
        }
    }
}
