//! Stored refresh credential.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::SubjectId;

/// The single live refresh credential of a subject
///
/// Created on first issuance and overwritten on every rotation. Only the
/// one-way hash of the refresh token is ever held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub subject_id: SubjectId,
    pub refresh_hash: String,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(subject_id: SubjectId, refresh_hash: String) -> Self {
        Self {
            subject_id,
            refresh_hash,
            updated_at: Utc::now(),
        }
    }

    /// Replaces the stored hash, superseding the previous refresh token
    pub fn replace_hash(&mut self, refresh_hash: String) {
        self.refresh_hash = refresh_hash;
        self.updated_at = Utc::now();
    }
}
