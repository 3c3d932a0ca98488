//! Access token verification

use chrono::Utc;
use jsonwebtoken::{decode, Validation};

use crate::domain::entities::token::AccessClaims;
use crate::errors::{DomainError, TokenError};
use crate::services::keys::KeyProvider;

use super::signer::ACCESS_TOKEN_ALGORITHM;

/// Parses and validates access tokens
///
/// Only RS512 is accepted. Expiry is checked with zero leeway.
pub struct TokenVerifier<K: KeyProvider> {
    keys: K,
    validation: Validation,
}

impl<K: KeyProvider> TokenVerifier<K> {
    pub fn new(keys: K) -> Self {
        let mut validation = Validation::new(ACCESS_TOKEN_ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.set_required_spec_claims(&["exp", "nbf", "sub"]);

        Self { keys, validation }
    }

    /// Verifies `token` and returns its subject
    pub fn verify(&self, token: &str) -> Result<String, DomainError> {
        self.verify_claims(token).map(|claims| claims.sub)
    }

    /// Verifies `token` and returns all of its claims
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - Signature valid and token unexpired
    /// * `Err(DomainError)` - `InvalidToken` for any token defect, `KeyUnavailable` for key failures
    pub fn verify_claims(&self, token: &str) -> Result<AccessClaims, DomainError> {
        let pair = self.keys.key_pair()?;

        let token_data = decode::<AccessClaims>(token, pair.decoding_key(), &self.validation)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Access token rejected");
                DomainError::Token(TokenError::InvalidToken)
            })?;

        if token_data.claims.exp <= Utc::now().timestamp() {
            tracing::debug!("Access token rejected: expired");
            return Err(TokenError::InvalidToken.into());
        }

        Ok(token_data.claims)
    }
}
