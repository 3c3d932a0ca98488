//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository traits:
//! - **Database**: MySQL connection pool, schema bootstrap, and the SQLx-backed
//!   credential store and identity store
//! - **Seed**: demo users for local runs

use tp_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Demo data for local runs
pub mod seed;

pub use database::{DatabasePool, MySqlCredentialStore, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A query did not finish within its time budget
    #[error("Database operation '{operation}' timed out after {millis} ms")]
    Timeout {
        operation: &'static str,
        millis: u128,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::storage(error.to_string())
    }
}
