// ABOUTME: Database operations for recipe records and their ingredient associations
// ABOUTME: Handles CRUD plus the storage-level filter query used by recipe search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe store.
//!
//! Recipes are scalar rows plus ordered association rows into the shared
//! `ingredients` table. Writes that touch both tables run in one transaction
//! so a failed association insert cannot leave a half-written recipe.
//! Storage order is ascending id, which every query here preserves.

use crate::errors::{AppError, AppResult};
use crate::models::{Ingredient, Recipe, RecipeDraft};
use sqlx::{sqlite::SqliteRow, Row, Sqlite, SqlitePool, Transaction};

/// Storage-level filter for recipe queries.
///
/// Each field is an optional predicate; an unset field matches everything.
/// Ingredient constraints are deliberately absent: they are applied in memory
/// after mapping, not in SQL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Exact match on the vegetarian flag
    pub is_vegetarian: Option<bool>,
    /// Exact match on the serving count
    pub servings: Option<i64>,
    /// Case-sensitive substring match on instructions; the empty string
    /// matches everything
    pub instructions: Option<String>,
}

/// Manager for recipe rows and their ingredient associations
#[derive(Clone)]
pub struct RecipesManager {
    pool: SqlitePool,
}

impl RecipesManager {
    /// Create a new manager backed by the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch every recipe in storage (id) order
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn find_all(&self) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(
            "SELECT id, is_vegetarian, servings, instructions FROM recipes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        self.attach_ingredients(rows).await
    }

    /// Fetch a recipe by id with its ingredients loaded in position order
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn get(&self, id: i64) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            "SELECT id, is_vegetarian, servings, instructions FROM recipes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recipe {id}: {e}")))?;

        match row {
            Some(row) => {
                let ingredients = self.load_ingredients(row.get("id")).await?;
                Ok(Some(row_to_recipe(&row, ingredients)))
            }
            None => Ok(None),
        }
    }

    /// Fetch recipes matching the storage-level filter, in id order.
    ///
    /// The predicate is a conjunction of the set fields: exact match for the
    /// vegetarian flag and serving count, case-sensitive substring match for
    /// instructions. `instr` is used instead of `LIKE` because SQLite `LIKE`
    /// is case-insensitive for ASCII. An empty instructions filter is skipped
    /// entirely, so it matches every row.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn find_matching(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let mut conditions: Vec<&str> = Vec::new();
        if filter.is_vegetarian.is_some() {
            conditions.push("is_vegetarian = ?");
        }
        if filter.servings.is_some() {
            conditions.push("servings = ?");
        }
        let needle = filter.instructions.as_deref().filter(|s| !s.is_empty());
        if needle.is_some() {
            conditions.push("instr(instructions, ?) > 0");
        }

        let sql = if conditions.is_empty() {
            "SELECT id, is_vegetarian, servings, instructions FROM recipes ORDER BY id".to_owned()
        } else {
            format!(
                "SELECT id, is_vegetarian, servings, instructions FROM recipes WHERE {} ORDER BY id",
                conditions.join(" AND ")
            )
        };

        let mut query = sqlx::query(&sql);
        if let Some(is_vegetarian) = filter.is_vegetarian {
            query = query.bind(i64::from(is_vegetarian));
        }
        if let Some(servings) = filter.servings {
            query = query.bind(servings);
        }
        if let Some(needle) = needle {
            query = query.bind(needle);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to filter recipes: {e}")))?;

        self.attach_ingredients(rows).await
    }

    /// Insert a new recipe with a fresh identity
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn create(&self, draft: &RecipeDraft) -> AppResult<Recipe> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let result = sqlx::query(
            "INSERT INTO recipes (is_vegetarian, servings, instructions) VALUES ($1, $2, $3)",
        )
        .bind(i64::from(draft.is_vegetarian))
        .bind(draft.servings)
        .bind(&draft.instructions)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipe: {e}")))?;

        let id = result.last_insert_rowid();
        insert_associations(&mut tx, id, &draft.ingredients).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit recipe create: {e}")))?;

        Ok(Recipe {
            id,
            is_vegetarian: draft.is_vegetarian,
            servings: draft.servings,
            instructions: draft.instructions.clone(),
            ingredients: draft.ingredients.clone(),
        })
    }

    /// Fully replace an existing recipe, retaining its identity.
    ///
    /// All scalar fields and the entire ingredient association list are
    /// overwritten. Returns `None`, with nothing mutated, when the id does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn update(&self, id: i64, draft: &RecipeDraft) -> AppResult<Option<Recipe>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let result = sqlx::query(
            "UPDATE recipes SET is_vegetarian = $1, servings = $2, instructions = $3 WHERE id = $4",
        )
        .bind(i64::from(draft.is_vegetarian))
        .bind(draft.servings)
        .bind(&draft.instructions)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to update recipe {id}: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear associations: {e}")))?;

        insert_associations(&mut tx, id, &draft.ingredients).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit recipe update: {e}")))?;

        Ok(Some(Recipe {
            id,
            is_vegetarian: draft.is_vegetarian,
            servings: draft.servings,
            instructions: draft.instructions.clone(),
            ingredients: draft.ingredients.clone(),
        }))
    }

    /// Delete a recipe and its associations.
    ///
    /// Ingredient rows are never removed, even when the last referencing
    /// recipe goes away. Returns `false` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear associations: {e}")))?;

        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete recipe {id}: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit recipe delete: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Load the ordered ingredient list for one recipe
    async fn load_ingredients(&self, recipe_id: i64) -> AppResult<Vec<Ingredient>> {
        let rows = sqlx::query(
            r"
            SELECT i.id, i.name
            FROM recipe_ingredients ri
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE ri.recipe_id = $1
            ORDER BY ri.position
            ",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load ingredients: {e}")))?;

        Ok(rows
            .iter()
            .map(|r| Ingredient {
                id: r.get("id"),
                name: r.get("name"),
            })
            .collect())
    }

    /// Map scalar rows to recipes with their ingredient lists attached
    async fn attach_ingredients(&self, rows: Vec<SqliteRow>) -> AppResult<Vec<Recipe>> {
        let mut recipes = Vec::with_capacity(rows.len());
        for row in &rows {
            let ingredients = self.load_ingredients(row.get("id")).await?;
            recipes.push(row_to_recipe(row, ingredients));
        }
        Ok(recipes)
    }
}

/// Write the ordered association rows for a recipe
async fn insert_associations(
    tx: &mut Transaction<'_, Sqlite>,
    recipe_id: i64,
    ingredients: &[Ingredient],
) -> AppResult<()> {
    for (position, ingredient) in ingredients.iter().enumerate() {
        sqlx::query(
            "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, position) VALUES ($1, $2, $3)",
        )
        .bind(recipe_id)
        .bind(ingredient.id)
        .bind(i64::try_from(position).unwrap_or(i64::MAX))
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to associate ingredient: {e}")))?;
    }
    Ok(())
}

fn row_to_recipe(row: &SqliteRow, ingredients: Vec<Ingredient>) -> Recipe {
    Recipe {
        id: row.get("id"),
        is_vegetarian: row.get::<i64, _>("is_vegetarian") != 0,
        servings: row.get("servings"),
        instructions: row.get("instructions"),
        ingredients,
    }
}
