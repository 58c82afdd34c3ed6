// ABOUTME: Main library entry point for the recipe-manager service
// ABOUTME: Exposes the database, search, service, and HTTP route modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Recipe Manager
//!
//! A small recipe catalog service: recipes with a serving count, a vegetarian
//! flag, free-text instructions, and an ordered list of named ingredients,
//! exposed through a JSON CRUD API with server-side filtering.
//!
//! ## Architecture
//!
//! - **database**: SQLite persistence via `sqlx` — ingredient registry,
//!   recipe records, and the storage-level filter query
//! - **search**: the criteria value object splitting filters into a storage
//!   predicate and a pure in-memory ingredient refinement
//! - **services**: CRUD orchestration and the recipe-to-view transform
//! - **routes**: axum handlers under `/api/recipes`, plus health probes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recipe_manager::config::ServerConfig;
//! use recipe_manager::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Recipe Manager configured: {}", config.summary());
//!     Ok(())
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// Database connection management and table migrations
pub mod database;

/// Unified error handling and HTTP error responses
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Domain types for recipes and ingredients
pub mod models;

/// HTTP route handlers
pub mod routes;

/// Search criteria and the ingredient refinement
pub mod search;

/// Service layer orchestrating CRUD and search
pub mod services;
