// ABOUTME: Service layer orchestrating database managers into API operations
// ABOUTME: Re-exports the recipes service and its request/view types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Service layer.

pub mod recipes;

pub use recipes::{RecipeRequest, RecipeView, RecipesService};
