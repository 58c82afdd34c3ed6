// ABOUTME: Domain types for recipes and ingredients
// ABOUTME: Plain data structs shared by the database, search, and service layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain model: recipes and the ingredients they reference.
//!
//! A [`Recipe`] holds references to shared [`Ingredient`] rows (many recipes
//! may use the same ingredient); the order of the ingredient list is part of
//! the recipe and survives read/write round-trips.

use serde::{Deserialize, Serialize};

/// A named ingredient with a stable, name-unique identity.
///
/// Created lazily the first time a recipe references an unseen name and never
/// deleted by this service; deleting a recipe leaves its ingredients behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Database identity, assigned on first insert
    pub id: i64,
    /// Globally unique, case-sensitive name
    pub name: String,
}

/// A persisted recipe with its ingredient list loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Database identity
    pub id: i64,
    /// Whether the dish is vegetarian
    pub is_vegetarian: bool,
    /// Number of servings the recipe yields (non-negative)
    pub servings: i64,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Referenced ingredients in recipe order; duplicates are allowed
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Ingredient names in recipe order
    #[must_use]
    pub fn ingredient_names(&self) -> Vec<String> {
        self.ingredients.iter().map(|i| i.name.clone()).collect()
    }
}

/// The writable fields of a recipe, with ingredients already resolved.
///
/// Used for both insert (fresh identity) and update (full replace under an
/// existing identity).
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    /// Whether the dish is vegetarian
    pub is_vegetarian: bool,
    /// Number of servings (validated non-negative before reaching storage)
    pub servings: i64,
    /// Free-text preparation instructions
    pub instructions: String,
    /// Resolved ingredients in the order the client gave them
    pub ingredients: Vec<Ingredient>,
}
