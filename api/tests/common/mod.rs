//! Shared setup for transport tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use once_cell::sync::Lazy;

use tp_api::routes::AppState;
use tp_core::domain::entities::User;
use tp_core::repositories::{
    CredentialStore, InMemoryCredentialStore, InMemoryUserRepository, RefreshHasher,
};
use tp_core::services::{KeyPair, KeyProvider, RotationService, StaticKeyProvider};
use tp_core::TokenServiceConfig;

pub const JSON_LIMIT: usize = 16 * 1024;

static TEST_KEYS: Lazy<Arc<KeyPair>> =
    Lazy::new(|| Arc::new(KeyPair::generate(2048).expect("failed to generate test key")));

pub fn token_config() -> TokenServiceConfig {
    TokenServiceConfig {
        access_token_ttl_seconds: 300,
        refresh_hash_cost: 4,
    }
}

pub struct TestContext<K: KeyProvider> {
    pub state: web::Data<AppState<K, InMemoryCredentialStore, InMemoryUserRepository>>,
    pub store: InMemoryCredentialStore,
    pub user: User,
}

pub fn context_with_keys<K: KeyProvider>(keys: K) -> TestContext<K> {
    let user = User::new("Bonnie");
    let store = InMemoryCredentialStore::new(RefreshHasher::new(4));
    let users = InMemoryUserRepository::with_users([user.clone()]);
    let service = RotationService::new(Arc::new(keys), store.clone(), users, &token_config());

    TestContext {
        state: web::Data::new(AppState::new(service)),
        store,
        user,
    }
}

pub fn context() -> TestContext<StaticKeyProvider> {
    context_with_keys(StaticKeyProvider::from_shared(TEST_KEYS.clone()))
}

/// Whether `refresh` is the token currently stored for `subject`
pub async fn stored(store: &InMemoryCredentialStore, subject: &str, refresh: &str) -> bool {
    store.compare_refresh(subject, refresh).await.unwrap()
}
