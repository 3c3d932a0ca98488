//! User repository trait for the identity store.
//!
//! The token service only needs to know whether a subject exists; creation
//! and lookup are used by the bootstrap seeding and by tests.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::domain::value_objects::SubjectId;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether a user with the given identifier exists
    ///
    /// # Returns
    /// * `Ok(true)` - User exists
    /// * `Ok(false)` - No such user
    /// * `Err(DomainError)` - Storage error occurred
    async fn user_exists(&self, id: &SubjectId) -> Result<bool, DomainError>;

    /// Find a user by their identifier
    async fn find_by_id(&self, id: &SubjectId) -> Result<Option<User>, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate identifier)
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
