//! HTTP server command for the enrolment intake API
//!
//! Connects to the database eagerly so a bad configuration fails at
//! startup, not on the first submission.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use enrollctl_server::db::create_pool;
use enrollctl_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Credentials come from flags or environment, never from constants
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL env var")?;

    tracing::info!("Starting enrollctl server on {}", args.bind);

    // Create database pool (fails fast if the database is unreachable)
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    // Configure server
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
