// ABOUTME: Database connection management and schema creation
// ABOUTME: Wraps the SQLite pool and runs idempotent table migrations at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Database Management
//!
//! Connection pooling and schema setup for the recipe catalog. The schema is
//! three tables: `recipes` (scalar fields), `ingredients` (name-unique rows),
//! and `recipe_ingredients` (ordered many-to-many associations, where the
//! `position` column makes ingredient ordering a persisted property).

pub mod ingredients;
pub mod recipes;

use crate::errors::AppResult;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

/// Database manager for recipe and ingredient storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration statement fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let in_memory = database_url.contains(":memory:");

        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !in_memory {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // Each pooled :memory: connection is its own database; a single
        // connection keeps one schema visible to every caller.
        let max_connections = if in_memory { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&connection_options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations (idempotent table creation)
    ///
    /// # Errors
    ///
    /// Returns an error if a DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                is_vegetarian INTEGER NOT NULL DEFAULT 0,
                servings INTEGER NOT NULL DEFAULT 0,
                instructions TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Association rows are deleted explicitly in recipe delete/update;
        // SQLite ships with foreign_keys off, so no cascade is relied on.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                recipe_id INTEGER NOT NULL REFERENCES recipes(id),
                ingredient_id INTEGER NOT NULL REFERENCES ingredients(id),
                position INTEGER NOT NULL,
                PRIMARY KEY (recipe_id, position)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
