// ABOUTME: Route handlers for the recipes REST API
// ABOUTME: Provides CRUD endpoints plus filtered listing under /api/recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipes routes.
//!
//! JSON CRUD surface under `/api/recipes`. Listing accepts the filter
//! dimensions as query parameters, with `includedIngredients` and
//! `excludedIngredients` as repeated keys; those need
//! [`axum_extra::extract::Query`], since axum's own extractor cannot collect
//! repeated keys into a `Vec`. "Not found" results from the service become
//! 404 responses here and nowhere else.

use crate::database::Database;
use crate::errors::AppError;
use crate::search::SearchCriteria;
use crate::services::{RecipeRequest, RecipesService};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_extra::extract::Query;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing recipes
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListRecipesQuery {
    /// Filter on the vegetarian flag
    pub is_vegetarian: Option<bool>,
    /// Filter on the serving count
    pub servings: Option<i64>,
    /// Case-sensitive substring filter on instructions
    pub instructions: Option<String>,
    /// Names that must all be present (repeated key)
    #[serde(default)]
    pub included_ingredients: Vec<String>,
    /// Names that must all be absent (repeated key)
    #[serde(default)]
    pub excluded_ingredients: Vec<String>,
}

impl From<ListRecipesQuery> for SearchCriteria {
    fn from(query: ListRecipesQuery) -> Self {
        Self {
            is_vegetarian: query.is_vegetarian,
            servings: query.servings,
            instructions: query.instructions,
            included_ingredients: query.included_ingredients,
            excluded_ingredients: query.excluded_ingredients,
        }
    }
}

/// Recipes routes handler
pub struct RecipesRoutes;

impl RecipesRoutes {
    /// Create all recipes routes
    pub fn routes(database: Arc<Database>) -> Router {
        Router::new()
            .route("/api/recipes", get(Self::handle_list))
            .route("/api/recipes", post(Self::handle_create))
            .route("/api/recipes/:id", get(Self::handle_get))
            .route("/api/recipes/:id", put(Self::handle_update))
            .route("/api/recipes/:id", delete(Self::handle_delete))
            .with_state(database)
    }

    /// Handle GET /api/recipes - list recipes matching the filter
    async fn handle_list(
        State(database): State<Arc<Database>>,
        Query(query): Query<ListRecipesQuery>,
    ) -> Result<Response, AppError> {
        let service = RecipesService::new(&database);
        let criteria = SearchCriteria::from(query);
        let views = service.list(&criteria).await?;
        Ok((StatusCode::OK, Json(views)).into_response())
    }

    /// Handle POST /api/recipes - create a recipe
    async fn handle_create(
        State(database): State<Arc<Database>>,
        Json(body): Json<RecipeRequest>,
    ) -> Result<Response, AppError> {
        let service = RecipesService::new(&database);
        let view = service.create(&body).await?;
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    /// Handle GET /api/recipes/:id - fetch one recipe
    async fn handle_get(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let service = RecipesService::new(&database);
        let view = service
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    /// Handle PUT /api/recipes/:id - fully replace a recipe
    async fn handle_update(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
        Json(body): Json<RecipeRequest>,
    ) -> Result<Response, AppError> {
        let service = RecipesService::new(&database);
        let view = service
            .update(id, &body)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    /// Handle DELETE /api/recipes/:id - delete a recipe
    async fn handle_delete(
        State(database): State<Arc<Database>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let service = RecipesService::new(&database);
        if !service.delete(id).await? {
            return Err(AppError::not_found(format!("Recipe {id}")));
        }
        Ok(StatusCode::OK.into_response())
    }
}
