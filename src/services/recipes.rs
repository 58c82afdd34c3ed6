// ABOUTME: Recipe service orchestrating CRUD, ingredient resolution, and search
// ABOUTME: Translates between persisted recipes and the API-facing view shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe service.
//!
//! Orchestrates the ingredient and recipe stores: resolves ingredient names
//! on writes, delegates listing to the storage filter plus the in-memory
//! ingredient refinement, and maps every outgoing recipe through the explicit
//! [`to_view`] transform (field copy plus ingredient-name flattening in one
//! visible step).

use crate::database::ingredients::IngredientsManager;
use crate::database::recipes::RecipesManager;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Ingredient, Recipe, RecipeDraft};
use crate::search::SearchCriteria;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Incoming recipe payload for create and update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    /// Whether the dish is vegetarian
    pub is_vegetarian: bool,
    /// Number of servings; must be non-negative
    pub servings: i64,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Ingredient names in order; duplicates are kept as given
    pub ingredients: Vec<String>,
}

/// API-facing projection of a recipe with ingredients flattened to names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    /// Recipe identity
    pub id: i64,
    /// Whether the dish is vegetarian
    pub is_vegetarian: bool,
    /// Number of servings
    pub servings: i64,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Ingredient names, order preserved
    pub ingredients: Vec<String>,
}

/// Map a persisted recipe to its API view.
///
/// Field copy plus the ingredient-name flattening in one step; nothing else
/// post-processes views.
#[must_use]
pub fn to_view(recipe: &Recipe) -> RecipeView {
    RecipeView {
        id: recipe.id,
        is_vegetarian: recipe.is_vegetarian,
        servings: recipe.servings,
        instructions: recipe.instructions.clone(),
        ingredients: recipe.ingredient_names(),
    }
}

/// Service for recipe CRUD and search
#[derive(Clone)]
pub struct RecipesService {
    ingredients: IngredientsManager,
    recipes: RecipesManager,
}

impl RecipesService {
    /// Create a service over the given database
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            ingredients: IngredientsManager::new(database.pool().clone()),
            recipes: RecipesManager::new(database.pool().clone()),
        }
    }

    /// List recipes matching the criteria, in storage order.
    ///
    /// Runs the storage filter, maps candidates to views, then applies the
    /// ingredient refinement. Returns an empty vec when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn list(&self, criteria: &SearchCriteria) -> AppResult<Vec<RecipeView>> {
        let candidates = self.recipes.find_matching(&criteria.storage_filter()).await?;
        let views = candidates
            .iter()
            .map(to_view)
            .filter(|view| criteria.matches_ingredients(&view.ingredients))
            .collect::<Vec<_>>();
        debug!(matched = views.len(), "listed recipes");
        Ok(views)
    }

    /// Create a recipe, resolving each ingredient name in request order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative serving count, or a database
    /// error if persistence fails.
    pub async fn create(&self, request: &RecipeRequest) -> AppResult<RecipeView> {
        validate(request)?;
        let ingredients = self.resolve_ingredients(&request.ingredients).await?;
        let recipe = self.recipes.create(&draft(request, ingredients)).await?;
        info!(recipe_id = recipe.id, "created recipe");
        Ok(to_view(&recipe))
    }

    /// Fully replace an existing recipe.
    ///
    /// Returns `None`, with nothing mutated (no ingredient rows created),
    /// when the id does not exist. Partial-field update is not supported:
    /// every field including the ingredient list is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative serving count, or a database
    /// error if persistence fails.
    pub async fn update(&self, id: i64, request: &RecipeRequest) -> AppResult<Option<RecipeView>> {
        validate(request)?;
        // Existence check before ingredient resolution, so an update of a
        // missing id leaves no trace in the ingredients table either.
        if self.recipes.get(id).await?.is_none() {
            return Ok(None);
        }
        let ingredients = self.resolve_ingredients(&request.ingredients).await?;
        let updated = self.recipes.update(id, &draft(request, ingredients)).await?;
        if updated.is_some() {
            info!(recipe_id = id, "updated recipe");
        }
        Ok(updated.as_ref().map(to_view))
    }

    /// Delete a recipe. Returns `false` when the id does not exist.
    /// Orphaned ingredients are left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let deleted = self.recipes.delete(id).await?;
        if deleted {
            info!(recipe_id = id, "deleted recipe");
        }
        Ok(deleted)
    }

    /// Fetch a single recipe view. Returns `None` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn get(&self, id: i64) -> AppResult<Option<RecipeView>> {
        let recipe = self.recipes.get(id).await?;
        Ok(recipe.as_ref().map(to_view))
    }

    /// Resolve names to ingredient rows in order, creating unseen ones
    async fn resolve_ingredients(&self, names: &[String]) -> AppResult<Vec<Ingredient>> {
        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            resolved.push(self.ingredients.resolve(name).await?);
        }
        Ok(resolved)
    }
}

fn validate(request: &RecipeRequest) -> AppResult<()> {
    if request.servings < 0 {
        return Err(AppError::invalid_input(format!(
            "servings must be non-negative, got {}",
            request.servings
        )));
    }
    Ok(())
}

fn draft(request: &RecipeRequest, ingredients: Vec<Ingredient>) -> RecipeDraft {
    RecipeDraft {
        is_vegetarian: request.is_vegetarian,
        servings: request.servings,
        instructions: request.instructions.clone(),
        ingredients,
    }
}
