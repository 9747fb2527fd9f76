// ABOUTME: Server binary for the Recipe API
// ABOUTME: Loads configuration, initializes logging and the database, then serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe API Server Binary
//!
//! Starts the HTTP server with a migrated `SQLite` database.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use recipe_api::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    server::{ServerLifecycle, ServerResources},
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-api")]
#[command(about = "Recipe API - validated recipe ingest backed by SQLite")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (sqlite:<path> or sqlite::memory:)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(database_url)?;
    }

    logging::init_from_env()?;

    info!("Starting Recipe API");
    info!("{}", config.summary());

    let database = Database::new(&config.database).await?;
    info!("Database initialized successfully: {}", database.url());

    let config = Arc::new(config);
    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(database, Arc::clone(&config)));
    if let Err(e) = ServerLifecycle::new(resources).run().await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Create Recipe: POST http://{host}:{port}/api/recipes");
    info!("   Health:        GET  http://{host}:{port}/health");
    info!("   Readiness:     GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
