// ABOUTME: Server binary for the recipe-manager service
// ABOUTME: Loads configuration, initializes the database, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recipe Manager Server Binary
//!
//! Starts the recipe catalog HTTP API: environment configuration, structured
//! logging, idempotent database migration, then an axum server.

use anyhow::Result;
use clap::Parser;
use recipe_manager::{config::ServerConfig, database::Database, logging, routes};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-manager")]
#[command(about = "Recipe catalog service with ingredient-aware search")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Recipe Manager");
    info!("{}", config.summary());

    let database = Arc::new(Database::new(&config.database_url).await?);
    info!("Database initialized and migrated");

    let app = routes::router(database);
    let listener = TcpListener::bind((config.http_host.as_str(), config.http_port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
