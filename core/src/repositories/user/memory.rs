//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::domain::value_objects::SubjectId;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory user repository for tests and local runs
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<SubjectId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `users`
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn user_exists(&self, id: &SubjectId) -> Result<bool, DomainError> {
        Ok(self.users.read().await.contains_key(id))
    }

    async fn find_by_id(&self, id: &SubjectId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(DomainError::storage(format!("duplicate user id {}", user.id)));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}
