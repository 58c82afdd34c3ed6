// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Provides liveness and database-backed readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Health check routes for service monitoring.
//!
//! `/health` is a pure liveness probe; `/ready` additionally pings the
//! database, the one dependency this service has.

use crate::database::Database;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(database: Arc<Database>) -> Router {
        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler(
            State(database): State<Arc<Database>>,
        ) -> (StatusCode, Json<serde_json::Value>) {
            let database_ok = sqlx::query("SELECT 1")
                .fetch_one(database.pool())
                .await
                .is_ok();
            let status = if database_ok {
                StatusCode::OK
            } else {
                StatusCode::SERVICE_UNAVAILABLE
            };
            (
                status,
                Json(serde_json::json!({
                    "status": if database_ok { "ready" } else { "degraded" },
                    "database": database_ok,
                    "timestamp": chrono::Utc::now().to_rfc3339()
                })),
            )
        }

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(database)
    }
}
