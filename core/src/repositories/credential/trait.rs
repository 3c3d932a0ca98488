//! Credential store trait defining persistence of refresh-token hashes.
//!
//! Each subject owns at most one credential record. Storing a new refresh
//! token overwrites the previous hash, so only the latest token compares
//! equal. Concurrent writers are last-write-wins.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Repository trait for refresh credentials
///
/// Subjects are passed as raw strings; implementations parse them and reject
/// malformed identifiers with `DomainError::InvalidSubject`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Check whether a credential record exists for `subject`
    async fn exists(&self, subject: &str) -> Result<bool, DomainError>;

    /// Hash `refresh_token` and upsert it as the subject's current credential
    ///
    /// # Returns
    /// * `Ok(())` - Record created or replaced
    /// * `Err(DomainError)` - `InvalidSubject`, or `StorageFailure` on backend errors
    async fn store_refresh(&self, subject: &str, refresh_token: &str) -> Result<(), DomainError>;

    /// Compare `refresh_token` against the stored hash
    ///
    /// # Returns
    /// * `Ok(true)` - The token is the subject's current refresh token
    /// * `Ok(false)` - The token does not match
    /// * `Err(DomainError::NoSuchCredential)` - Nothing stored for the subject
    async fn compare_refresh(&self, subject: &str, refresh_token: &str)
        -> Result<bool, DomainError>;
}
