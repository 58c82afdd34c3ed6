// ABOUTME: Database operations for the deduplicated ingredient registry
// ABOUTME: Resolves ingredient names to stable identities, creating rows on first use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Ingredient store.
//!
//! Ingredient names are globally unique and case-sensitive. [`IngredientsManager::resolve`]
//! is the only way rows are created: the first recipe to reference an unseen
//! name creates it, and nothing in this service ever deletes one.

use crate::errors::{AppError, AppResult};
use crate::models::Ingredient;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Manager for ingredient rows
#[derive(Clone)]
pub struct IngredientsManager {
    pool: SqlitePool,
}

impl IngredientsManager {
    /// Create a new manager backed by the given pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up an ingredient by exact name
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Ingredient>> {
        let row = sqlx::query("SELECT id, name FROM ingredients WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up ingredient: {e}")))?;

        Ok(row.map(|r| row_to_ingredient(&r)))
    }

    /// Resolve a name to its ingredient, creating the row if absent.
    ///
    /// Idempotent: repeated calls with the same name always return the same
    /// identity. Two concurrent callers may both observe "absent"; the UNIQUE
    /// constraint plus `ON CONFLICT DO NOTHING` turns the loser's insert into
    /// a no-op, and the re-read below returns the winner's row.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn resolve(&self, name: &str) -> AppResult<Ingredient> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok(existing);
        }

        sqlx::query("INSERT INTO ingredients (name) VALUES ($1) ON CONFLICT(name) DO NOTHING")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create ingredient: {e}")))?;

        self.find_by_name(name).await?.ok_or_else(|| {
            AppError::database(format!("Ingredient '{name}' missing after insert"))
        })
    }
}

fn row_to_ingredient(row: &SqliteRow) -> Ingredient {
    Ingredient {
        id: row.get("id"),
        name: row.get("name"),
    }
}
