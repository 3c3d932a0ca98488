//! Rotation service composing signer, verifier, refresh generator and stores

use std::sync::Arc;

use crate::domain::entities::token::TokenPair;
use crate::domain::value_objects::SubjectId;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{CredentialStore, UserRepository};
use crate::services::keys::KeyProvider;
use crate::services::token::{RefreshTokenGenerator, TokenServiceConfig, TokenSigner, TokenVerifier};

/// Service for issuing, validating and rotating token pairs
///
/// Holds no per-request state. The only invariant it maintains is that the
/// credential store always holds the hash of the last refresh token handed
/// out for a subject.
pub struct RotationService<K, S, U>
where
    K: KeyProvider,
    S: CredentialStore,
    U: UserRepository,
{
    signer: TokenSigner<Arc<K>>,
    verifier: TokenVerifier<Arc<K>>,
    refresh_tokens: RefreshTokenGenerator,
    credentials: S,
    users: U,
}

impl<K, S, U> RotationService<K, S, U>
where
    K: KeyProvider,
    S: CredentialStore,
    U: UserRepository,
{
    /// Creates a new rotation service
    ///
    /// # Arguments
    ///
    /// * `keys` - Key provider shared by signer and verifier
    /// * `credentials` - Store for refresh-token hashes
    /// * `users` - Identity store used to admit subjects on first issuance
    /// * `config` - Access token lifetime
    pub fn new(keys: Arc<K>, credentials: S, users: U, config: &TokenServiceConfig) -> Self {
        Self {
            signer: TokenSigner::new(keys.clone(), config),
            verifier: TokenVerifier::new(keys),
            refresh_tokens: RefreshTokenGenerator::new(),
            credentials,
            users,
        }
    }

    pub fn credentials(&self) -> &S {
        &self.credentials
    }

    pub fn users(&self) -> &U {
        &self.users
    }

    /// Issues a first token pair for a known subject
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New pair; the refresh hash has been stored
    /// * `Err(DomainError::InvalidSubject)` - Malformed identifier
    /// * `Err(DomainError::SubjectNotFound)` - No such user
    /// * `Err(DomainError)` - Key, entropy or storage failures
    pub async fn issue(&self, subject: &str) -> Result<TokenPair, DomainError> {
        let subject = SubjectId::parse(subject)?;
        if !self.users.user_exists(&subject).await? {
            tracing::info!(subject = %subject, "Token requested for unknown subject");
            return Err(DomainError::SubjectNotFound);
        }

        let pair = self.issue_pair(&subject).await?;
        tracing::info!(subject = %subject, "Issued token pair");
        Ok(pair)
    }

    /// Exchanges a valid pair for a new one
    ///
    /// The access token may not be expired. Once this returns `Ok`, the
    /// refresh token that was presented no longer compares equal.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Rotated pair
    /// * `Err(TokenError::InvalidToken)` - Access token failed verification
    /// * `Err(DomainError::NoSuchCredential)` - Nothing stored for the subject
    /// * `Err(TokenError::RefreshMismatch)` - Refresh token is not the current one
    pub async fn rotate(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<TokenPair, DomainError> {
        let subject = self.verifier.verify(access_token).map_err(|e| {
            if !e.is_fatal() {
                tracing::info!("Rotation rejected: access token invalid");
            }
            e
        })?;
        let subject = SubjectId::parse(&subject)?;

        if !self
            .credentials
            .compare_refresh(subject.as_str(), refresh_token)
            .await?
        {
            tracing::warn!(subject = %subject, "Rotation rejected: refresh token mismatch");
            return Err(TokenError::RefreshMismatch.into());
        }

        let pair = self.issue_pair(&subject).await?;
        tracing::info!(subject = %subject, "Rotated token pair");
        Ok(pair)
    }

    /// Verifies an access token and returns its subject
    pub fn validate(&self, access_token: &str) -> Result<String, DomainError> {
        self.verifier.verify(access_token)
    }

    async fn issue_pair(&self, subject: &SubjectId) -> Result<TokenPair, DomainError> {
        let access_token = self.signer.issue(subject.as_str())?;
        let refresh_token = self.refresh_tokens.generate()?;
        self.credentials
            .store_refresh(subject.as_str(), &refresh_token)
            .await?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.signer.ttl_seconds(),
        ))
    }
}
