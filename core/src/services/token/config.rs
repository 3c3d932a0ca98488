//! Configuration for access token issuance

use tp_shared::TokenConfig;

use crate::domain::entities::DEFAULT_ACCESS_TOKEN_TTL_SECONDS;

/// Configuration for the token signer and the credential store hashing
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Access token lifetime in seconds
    pub access_token_ttl_seconds: i64,
    /// bcrypt cost for stored refresh-token hashes
    pub refresh_hash_cost: u32,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_token_ttl_seconds: DEFAULT_ACCESS_TOKEN_TTL_SECONDS,
            refresh_hash_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&TokenConfig> for TokenServiceConfig {
    fn from(config: &TokenConfig) -> Self {
        Self {
            access_token_ttl_seconds: config.access_token_ttl_seconds,
            refresh_hash_cost: config.refresh_hash_cost,
        }
    }
}
