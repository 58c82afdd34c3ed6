// ABOUTME: Environment-based server configuration
// ABOUTME: Reads database URL and HTTP bind settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-only configuration.
//!
//! Everything the server needs comes from environment variables with sane
//! defaults, so a bare `recipe-manager` invocation works for local use.

use crate::errors::{AppError, AppResult};
use std::env;

/// Default SQLite database location when `DATABASE_URL` is unset
const DEFAULT_DATABASE_URL: &str = "sqlite:data/recipes.db";
/// Default HTTP bind address
const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Database connection URL (`sqlite:` scheme, or `sqlite::memory:`)
    pub database_url: String,
    /// HTTP bind host
    pub http_host: String,
    /// HTTP bind port
    pub http_port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `HTTP_PORT` is set but not a valid port
    /// number.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("invalid HTTP_PORT '{raw}': {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| DEFAULT_HTTP_HOST.to_owned()),
            http_port,
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "database={} listen={}:{}",
            self.database_url, self.http_host, self.http_port
        )
    }
}
