//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::time::Duration;

use tp_core::domain::entities::user::User;
use tp_core::domain::value_objects::SubjectId;
use tp_core::errors::DomainError;
use tp_core::repositories::UserRepository;

use crate::database::{bounded, DatabasePool};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
    /// Upper bound for each query
    query_timeout: Duration,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub fn from_database(database: &DatabasePool) -> Self {
        Self::new(database.get_pool().clone(), database.query_timeout())
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Failed to get id: {}", e)))?;

        Ok(User {
            id: SubjectId::parse(&id)
                .map_err(|_| DomainError::storage(format!("Stored user id is malformed: {}", id)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::storage(format!("Failed to get name: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::storage(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn user_exists(&self, id: &SubjectId) -> Result<bool, DomainError> {
        let found = bounded(
            "user_exists",
            self.query_timeout,
            sqlx::query("SELECT 1 FROM users WHERE id = ? LIMIT 1")
                .bind(id.as_str())
                .fetch_optional(&self.pool),
        )
        .await?;
        Ok(found.is_some())
    }

    async fn find_by_id(&self, id: &SubjectId) -> Result<Option<User>, DomainError> {
        let row = bounded(
            "user_find_by_id",
            self.query_timeout,
            sqlx::query("SELECT id, name, created_at FROM users WHERE id = ? LIMIT 1")
                .bind(id.as_str())
                .fetch_optional(&self.pool),
        )
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        bounded(
            "user_create",
            self.query_timeout,
            sqlx::query("INSERT INTO users (id, name, created_at) VALUES (?, ?, ?)")
                .bind(user.id.as_str())
                .bind(&user.name)
                .bind(user.created_at)
                .execute(&self.pool),
        )
        .await?;

        tracing::debug!(subject = %user.id, "Created user");
        Ok(user)
    }
}
