//! Domain-specific error types and error handling.

mod types;


pub use types::TokenError;

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// The identifier is not well-formed for the identity store's key space
    #[error("Invalid subject identifier: {subject}")]
    InvalidSubject { subject: String },

    /// The identifier is well-formed but no such user exists
    #[error("Subject not found")]
    SubjectNotFound,

    /// No refresh credential has ever been stored for the subject
    #[error("No credential stored for subject")]
    NoSuchCredential,

    /// The backing store failed or timed out
    #[error("Storage failure: {message}")]
    StorageFailure { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to token-specific errors
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Helper for store implementations
    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::StorageFailure {
            message: message.into(),
        }
    }

    /// Conditions caused by the caller's input rather than the service
    pub fn is_client_error(&self) -> bool {
        match self {
            DomainError::InvalidSubject { .. }
            | DomainError::SubjectNotFound
            | DomainError::NoSuchCredential => true,
            DomainError::Token(token_error) => token_error.is_client_error(),
            DomainError::StorageFailure { .. } | DomainError::Internal { .. } => false,
        }
    }

    /// Conditions that leave the process without usable keys or randomness
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DomainError::Token(TokenError::KeyUnavailable { .. })
                | DomainError::Token(TokenError::EntropySourceFailed)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
