//! MySQL implementation of the CredentialStore trait.
//!
//! One row per subject in `credentials`; storing a refresh token upserts the
//! row so the previous hash is overwritten atomically.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;
use std::time::Duration;

use tp_core::domain::value_objects::SubjectId;
use tp_core::errors::DomainError;
use tp_core::repositories::{CredentialStore, RefreshHasher};

use crate::database::{bounded, DatabasePool};

/// MySQL implementation of CredentialStore
pub struct MySqlCredentialStore {
    /// Database connection pool
    pool: MySqlPool,
    /// Refresh-token hashing
    hasher: RefreshHasher,
    /// Upper bound for each query
    query_timeout: Duration,
}

impl MySqlCredentialStore {
    /// Create a new MySQL credential store
    pub fn new(pool: MySqlPool, hasher: RefreshHasher, query_timeout: Duration) -> Self {
        Self {
            pool,
            hasher,
            query_timeout,
        }
    }

    pub fn from_database(database: &DatabasePool, hasher: RefreshHasher) -> Self {
        Self::new(database.get_pool().clone(), hasher, database.query_timeout())
    }

    async fn stored_hash(&self, subject: &SubjectId) -> Result<Option<String>, DomainError> {
        let hash = bounded(
            "credential_lookup",
            self.query_timeout,
            sqlx::query_scalar::<_, String>(
                "SELECT refresh_hash FROM credentials WHERE subject_id = ? LIMIT 1",
            )
            .bind(subject.as_str())
            .fetch_optional(&self.pool),
        )
        .await?;
        Ok(hash)
    }
}

#[async_trait]
impl CredentialStore for MySqlCredentialStore {
    async fn exists(&self, subject: &str) -> Result<bool, DomainError> {
        let subject = SubjectId::parse(subject)?;
        Ok(self.stored_hash(&subject).await?.is_some())
    }

    async fn store_refresh(&self, subject: &str, refresh_token: &str) -> Result<(), DomainError> {
        let subject = SubjectId::parse(subject)?;
        let hash = self.hasher.hash(refresh_token).await?;

        let query = r#"
            INSERT INTO credentials (subject_id, refresh_hash, updated_at)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                refresh_hash = VALUES(refresh_hash),
                updated_at = VALUES(updated_at)
        "#;

        bounded(
            "credential_upsert",
            self.query_timeout,
            sqlx::query(query)
                .bind(subject.as_str())
                .bind(&hash)
                .bind(Utc::now())
                .execute(&self.pool),
        )
        .await?;

        tracing::debug!(subject = %subject, "Stored refresh credential");
        Ok(())
    }

    async fn compare_refresh(
        &self,
        subject: &str,
        refresh_token: &str,
    ) -> Result<bool, DomainError> {
        let subject = SubjectId::parse(subject)?;
        let hash = self
            .stored_hash(&subject)
            .await?
            .ok_or(DomainError::NoSuchCredential)?;

        self.hasher.verify(refresh_token, &hash).await
    }
}
