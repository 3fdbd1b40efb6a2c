//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits and a bounded
//! acquire timeout so an unreachable database can never hang a request.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low for a single-form intake service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default acquire timeout. The original service had none and could
/// block indefinitely on a dead database.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Parse connection options from a database URL.
///
/// Pins the session encoding to UTF-8 so multi-byte names and
/// addresses round-trip without truncation or mojibake.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed.
pub fn connect_options(database_url: &str) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(PgConnectOptions::from_str(database_url)?.options([("client_encoding", "UTF8")]))
}

/// Create a PostgreSQL connection pool.
///
/// Connects eagerly, so an unreachable database fails fast at startup.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/enrollctl").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - Upper bound on waiting for a connection
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(connect_options(database_url)?)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_url() {
        assert!(connect_options("not a url").is_err());
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p enrollctl-server

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        // Verify we can execute a query and that the session encoding stuck
        let encoding: (String,) = sqlx::query_as("SHOW client_encoding")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(encoding.0, "UTF8");
    }
}
