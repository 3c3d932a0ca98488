use serde::{Deserialize, Serialize};
use validator::Validate;

use tp_core::domain::entities::{TokenPair, TOKEN_TYPE};

/// Query string of `POST /auth`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IssueTokenQuery {
    #[validate(length(min = 1, max = 64))]
    pub guid: String,
}

/// Body of `POST /refresh`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, max = 8192))]
    pub access_token: String,
    #[validate(length(min = 1, max = 72))]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: pair.expires_in,
        }
    }
}
