// ABOUTME: HTTP route assembly for the recipe-manager service
// ABOUTME: Merges recipe and health routers and attaches shared middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP routes.

pub mod health;
pub mod recipes;

use crate::database::Database;
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the full application router
#[must_use]
pub fn router(database: Arc<Database>) -> Router {
    Router::new()
        .merge(recipes::RecipesRoutes::routes(database.clone()))
        .merge(health::HealthRoutes::routes(database))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
