// ABOUTME: Storage seam for recipes and its SQLite implementation
// ABOUTME: Inserts recipes with INSERT ... RETURNING and maps rows back into Recipe records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use super::models::{Ingredient, NewRecipe, Recipe};
use crate::errors::{AppError, AppResult};

const RECIPE_COLUMNS: &str = "id, title, description, ingredients, instructions, \
                              prep_time_minutes, cook_time_minutes, servings, created_at";

/// Persistence operations the ingest service depends on
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persist a new recipe and return it exactly as stored
    async fn insert(&self, recipe: &NewRecipe) -> AppResult<Recipe>;

    /// Look up a stored recipe by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Recipe>>;
}

/// `SQLite` implementation of [`RecipeStore`]
#[derive(Clone)]
pub struct SqliteRecipeStore {
    pool: SqlitePool,
}

impl SqliteRecipeStore {
    /// Create a store over an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeStore for SqliteRecipeStore {
    async fn insert(&self, recipe: &NewRecipe) -> AppResult<Recipe> {
        let submission = &recipe.submission;
        let ingredients_json = serde_json::to_string(&submission.ingredients)?;
        let instructions_json = serde_json::to_string(&submission.instructions)?;

        let query = format!(
            r"
            INSERT INTO recipes (
                id, title, description, ingredients, instructions,
                prep_time_minutes, cook_time_minutes, servings
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING {RECIPE_COLUMNS}
            "
        );

        let row = sqlx::query(&query)
            .bind(recipe.id.to_string())
            .bind(&submission.title)
            .bind(&submission.description)
            .bind(&ingredients_json)
            .bind(&instructions_json)
            .bind(submission.prep_time_minutes)
            .bind(submission.cook_time_minutes)
            .bind(submission.servings)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database("Failed to create recipe").with_source(e))?;

        row_to_recipe(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        let query = format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = ?1");

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database("Failed to get recipe").with_source(e))?;

        row.as_ref().map(row_to_recipe).transpose()
    }
}

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> AppResult<T>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| AppError::database(format!("Failed to read column {name}: {e}")))
}

fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let id_str: String = column(row, "id")?;
    let ingredients_json: String = column(row, "ingredients")?;
    let instructions_json: String = column(row, "instructions")?;
    let created_at_str: String = column(row, "created_at")?;

    let ingredients: Vec<Ingredient> = serde_json::from_str(&ingredients_json)?;
    let instructions: Vec<String> = serde_json::from_str(&instructions_json)?;

    Ok(Recipe {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        title: column(row, "title")?,
        description: column(row, "description")?,
        ingredients,
        instructions,
        prep_time_minutes: column(row, "prep_time_minutes")?,
        cook_time_minutes: column(row, "cook_time_minutes")?,
        servings: column(row, "servings")?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))?
            .with_timezone(&Utc),
    })
}
