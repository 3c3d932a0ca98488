//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management
//! - Schema bootstrap
//! - Repository implementations with bounded query time

pub mod connection;
pub mod mysql;
pub mod schema;

#[cfg(test)]
mod tests;

use std::future::Future;
use std::time::Duration;

use crate::InfrastructureError;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlCredentialStore, MySqlUserRepository};

/// Runs a query future, failing with `InfrastructureError::Timeout` if it
/// does not complete within `limit`
pub(crate) async fn bounded<T, F>(
    operation: &'static str,
    limit: Duration,
    query: F,
) -> Result<T, InfrastructureError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, query).await {
        Ok(result) => result.map_err(InfrastructureError::from),
        Err(_) => {
            tracing::warn!(operation, timeout_ms = limit.as_millis() as u64, "Database operation timed out");
            Err(InfrastructureError::Timeout {
                operation,
                millis: limit.as_millis(),
            })
        }
    }
}
