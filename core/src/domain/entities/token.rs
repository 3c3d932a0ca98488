//! Token entities for JWT-based authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access token lifetime used when nothing else is configured (5 minutes)
pub const DEFAULT_ACCESS_TOKEN_TTL_SECONDS: i64 = 300;

/// Token type reported to clients
pub const TOKEN_TYPE: &str = "Bearer";

/// Claims structure for the access token payload
///
/// Once signed the claims are immutable: any change invalidates the signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (identity-store key)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl AccessClaims {
    /// Creates claims for `subject` valid from now for `ttl_seconds`
    pub fn new(subject: impl Into<String>, ttl_seconds: i64) -> Self {
        Self::issued_at(subject, Utc::now(), ttl_seconds)
    }

    /// Creates claims as if issued at `now`
    pub fn issued_at(subject: impl Into<String>, now: DateTime<Utc>, ttl_seconds: i64) -> Self {
        let issued = now.timestamp();
        Self {
            sub: subject.into(),
            iat: issued,
            nbf: issued,
            exp: issued + ttl_seconds,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Seconds until expiry (zero once expired)
    pub fn expires_in(&self) -> i64 {
        (self.exp - Utc::now().timestamp()).max(0)
    }
}

/// A freshly issued access/refresh pair
///
/// The refresh token here is the only plaintext copy; the store keeps a hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    pub access_token: String,

    /// Opaque refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}
