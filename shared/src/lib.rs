//! Shared utilities and common types for the TokenPair server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, KeyConfig, LogFormat, LoggingConfig, ServerConfig,
    TokenConfig,
};
pub use errors::{error_codes, ErrorResponse};
