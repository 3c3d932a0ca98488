//! Access token signing

use jsonwebtoken::{encode, Algorithm, Header};

use crate::domain::entities::token::AccessClaims;
use crate::errors::{DomainError, TokenError};
use crate::services::keys::KeyProvider;

use super::config::TokenServiceConfig;

/// Algorithm used for every access token
pub const ACCESS_TOKEN_ALGORITHM: Algorithm = Algorithm::RS512;

/// Issues signed, time-bounded access tokens
pub struct TokenSigner<K: KeyProvider> {
    keys: K,
    access_token_ttl_seconds: i64,
}

impl<K: KeyProvider> TokenSigner<K> {
    pub fn new(keys: K, config: &TokenServiceConfig) -> Self {
        Self {
            keys,
            access_token_ttl_seconds: config.access_token_ttl_seconds,
        }
    }

    /// Access token lifetime in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.access_token_ttl_seconds
    }

    /// Issues an access token for `subject`, valid from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWS
    /// * `Err(DomainError)` - `KeyUnavailable` or `SigningFailed`
    pub fn issue(&self, subject: &str) -> Result<String, DomainError> {
        let claims = AccessClaims::new(subject, self.access_token_ttl_seconds);
        self.sign(&claims)
    }

    /// Signs arbitrary claims with the current private key
    pub fn sign(&self, claims: &AccessClaims) -> Result<String, DomainError> {
        let pair = self.keys.key_pair()?;
        encode(&Header::new(ACCESS_TOKEN_ALGORITHM), claims, pair.encoding_key()).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            DomainError::Token(TokenError::SigningFailed)
        })
    }
}
