//! One-way hashing of refresh tokens

use crate::errors::DomainError;

/// bcrypt hashing of refresh tokens, run off the async executor
#[derive(Debug, Clone, Copy)]
pub struct RefreshHasher {
    cost: u32,
}

impl Default for RefreshHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl RefreshHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, refresh_token: &str) -> Result<String, DomainError> {
        let cost = self.cost;
        let plaintext = refresh_token.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("hash task failed: {e}"),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("failed to hash refresh token: {e}"),
            })
    }

    /// Returns `Ok(false)` for a non-matching token
    pub async fn verify(&self, refresh_token: &str, hash: &str) -> Result<bool, DomainError> {
        let plaintext = refresh_token.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("hash task failed: {e}"),
            })?
            .map_err(|e| DomainError::storage(format!("stored hash is unreadable: {e}")))
    }
}
