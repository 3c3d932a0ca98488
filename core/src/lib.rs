//! # TokenPair Core
//!
//! Core domain layer for the TokenPair backend.
//! This crate contains the subject identifier and claim types, the signing key
//! provider, access token signing and verification, refresh token generation,
//! the credential store contract, and the rotation service that ties them
//! together.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
