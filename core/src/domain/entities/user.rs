//! User entity as seen by the identity store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SubjectId;

/// A user known to the identity store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: SubjectId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user with a freshly generated identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SubjectId::generate(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}
