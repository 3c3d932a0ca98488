//! Token-related error types
//!
//! Messages are deliberately terse. The presentation layer decides what, if
//! anything, of these reaches a client.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// Key files are missing, empty, corrupt, or do not belong together
    #[error("Signing key unavailable: {message}")]
    KeyUnavailable { message: String },

    #[error("Token signing failed")]
    SigningFailed,

    /// Malformed, tampered, wrongly signed, or expired access token
    #[error("Invalid token")]
    InvalidToken,

    #[error("Entropy source failed")]
    EntropySourceFailed,

    /// The presented refresh token is not the one currently stored
    #[error("Refresh token mismatch")]
    RefreshMismatch,
}

impl TokenError {
    pub fn key_unavailable(message: impl Into<String>) -> Self {
        TokenError::KeyUnavailable {
            message: message.into(),
        }
    }

    /// Conditions caused by the presented credentials
    pub fn is_client_error(&self) -> bool {
        matches!(self, TokenError::InvalidToken | TokenError::RefreshMismatch)
    }
}
