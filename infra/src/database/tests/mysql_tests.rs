//! Integration tests against a live MySQL server
//!
//! Run with `DATABASE_URL=mysql://... cargo test -p tp_infra -- --ignored`.

use tp_core::domain::entities::user::User;
use tp_core::domain::value_objects::SubjectId;
use tp_core::errors::DomainError;
use tp_core::repositories::{CredentialStore, RefreshHasher, UserRepository};
use tp_shared::DatabaseConfig;

use crate::database::schema::ensure_schema;
use crate::database::{DatabasePool, MySqlCredentialStore, MySqlUserRepository};

async fn database() -> DatabasePool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = DatabasePool::new(DatabaseConfig::new(url).with_max_connections(2))
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    pool
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_user_create_and_exists() {
    let database = database().await;
    let users = MySqlUserRepository::from_database(&database);

    let user = users.create(User::new("Bonnie")).await.unwrap();
    assert!(users.user_exists(&user.id).await.unwrap());
    assert_eq!(users.find_by_id(&user.id).await.unwrap().unwrap().name, "Bonnie");
    assert!(!users.user_exists(&SubjectId::generate()).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_credential_upsert_overwrites() {
    let database = database().await;
    let store = MySqlCredentialStore::from_database(&database, RefreshHasher::new(4));
    let subject = SubjectId::generate();

    assert!(!store.exists(subject.as_str()).await.unwrap());
    assert!(matches!(
        store.compare_refresh(subject.as_str(), "x").await,
        Err(DomainError::NoSuchCredential)
    ));

    store.store_refresh(subject.as_str(), "first").await.unwrap();
    store.store_refresh(subject.as_str(), "second").await.unwrap();

    assert!(store.exists(subject.as_str()).await.unwrap());
    assert!(!store.compare_refresh(subject.as_str(), "first").await.unwrap());
    assert!(store.compare_refresh(subject.as_str(), "second").await.unwrap());
}
