//! In-memory implementation of CredentialStore

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Credential;
use crate::domain::value_objects::SubjectId;
use crate::errors::DomainError;

use super::hasher::RefreshHasher;
use super::trait_::CredentialStore;

/// Credential store kept in process memory
///
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryCredentialStore {
    credentials: Arc<RwLock<HashMap<SubjectId, Credential>>>,
    hasher: RefreshHasher,
}

impl InMemoryCredentialStore {
    pub fn new(hasher: RefreshHasher) -> Self {
        Self {
            credentials: Arc::new(RwLock::new(HashMap::new())),
            hasher,
        }
    }

    /// Returns the stored record for `subject`, if any
    pub async fn credential(&self, subject: &SubjectId) -> Option<Credential> {
        self.credentials.read().await.get(subject).cloned()
    }

    pub async fn len(&self) -> usize {
        self.credentials.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.credentials.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn exists(&self, subject: &str) -> Result<bool, DomainError> {
        let subject = SubjectId::parse(subject)?;
        Ok(self.credentials.read().await.contains_key(&subject))
    }

    async fn store_refresh(&self, subject: &str, refresh_token: &str) -> Result<(), DomainError> {
        let subject = SubjectId::parse(subject)?;
        let hash = self.hasher.hash(refresh_token).await?;

        let mut credentials = self.credentials.write().await;
        match credentials.get_mut(&subject) {
            Some(existing) => existing.replace_hash(hash),
            None => {
                credentials.insert(subject.clone(), Credential::new(subject, hash));
            }
        }
        Ok(())
    }

    async fn compare_refresh(
        &self,
        subject: &str,
        refresh_token: &str,
    ) -> Result<bool, DomainError> {
        let subject = SubjectId::parse(subject)?;
        let hash = self
            .credentials
            .read()
            .await
            .get(&subject)
            .map(|c| c.refresh_hash.clone())
            .ok_or(DomainError::NoSuchCredential)?;

        self.hasher.verify(refresh_token, &hash).await
    }
}
