//! Token route handlers
//!
//! - `POST /auth` issues a first pair for a known subject
//! - `POST /refresh` rotates a pair

pub mod issue;
pub mod refresh;

use std::sync::Arc;

use actix_web::http::header;
use actix_web::HttpResponse;

use tp_core::domain::entities::TokenPair;
use tp_core::repositories::{CredentialStore, UserRepository};
use tp_core::services::{KeyProvider, RotationService};

use crate::dto::TokenResponse;

/// Application state that holds shared services
pub struct AppState<K, S, U>
where
    K: KeyProvider,
    S: CredentialStore,
    U: UserRepository,
{
    pub rotation_service: Arc<RotationService<K, S, U>>,
}

impl<K, S, U> AppState<K, S, U>
where
    K: KeyProvider,
    S: CredentialStore,
    U: UserRepository,
{
    pub fn new(rotation_service: RotationService<K, S, U>) -> Self {
        Self {
            rotation_service: Arc::new(rotation_service),
        }
    }
}

/// 200 response carrying a token pair; never cached
pub(crate) fn token_response(pair: TokenPair) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .insert_header((header::PRAGMA, "no-cache"))
        .json(TokenResponse::from(pair))
}
