//! Token service module
//!
//! This module handles the access/refresh token primitives:
//! - RS512 access token signing
//! - Access token verification with a pinned algorithm
//! - Opaque refresh token generation

mod config;
mod refresh;
mod signer;
mod verifier;


pub use config::TokenServiceConfig;
pub use refresh::{RefreshTokenGenerator, REFRESH_TOKEN_BYTES};
pub use signer::{TokenSigner, ACCESS_TOKEN_ALGORITHM};
pub use verifier::TokenVerifier;
