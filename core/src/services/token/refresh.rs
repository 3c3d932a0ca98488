//! Opaque refresh token generation

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{DomainError, TokenError};

/// Random bytes per refresh token
pub const REFRESH_TOKEN_BYTES: usize = 16;

/// Produces high-entropy refresh tokens from the OS random source
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshTokenGenerator;

impl RefreshTokenGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Returns a fresh token: 16 random bytes, standard base64 with padding
    pub fn generate(&self) -> Result<String, DomainError> {
        Self::generate_with(&mut OsRng)
    }

    pub(crate) fn generate_with<R: RngCore + ?Sized>(rng: &mut R) -> Result<String, DomainError> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        rng.try_fill_bytes(&mut bytes).map_err(|e| {
            tracing::error!(error = %e, "Random source failed");
            DomainError::Token(TokenError::EntropySourceFailed)
        })?;
        Ok(STANDARD.encode(bytes))
    }
}
