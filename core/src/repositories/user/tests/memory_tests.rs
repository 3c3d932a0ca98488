//! Unit tests for the in-memory user repository

use crate::domain::entities::user::User;
use crate::domain::value_objects::SubjectId;
use crate::errors::DomainError;
use crate::repositories::user::{InMemoryUserRepository, UserRepository};

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryUserRepository::new();
    let user = User::new("Bonnie");

    let created = repo.create(user.clone()).await.unwrap();
    assert_eq!(created, user);

    assert!(repo.user_exists(&user.id).await.unwrap());
    let found = repo.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Bonnie");
}

#[tokio::test]
async fn test_unknown_subject() {
    let repo = InMemoryUserRepository::with_users([User::new("Clyde")]);
    let stranger = SubjectId::generate();

    assert!(!repo.user_exists(&stranger).await.unwrap());
    assert!(repo.find_by_id(&stranger).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_id_rejected() {
    let user = User::new("Bonnie");
    let repo = InMemoryUserRepository::with_users([user.clone()]);

    let err = repo.create(user).await.unwrap_err();
    assert!(matches!(err, DomainError::StorageFailure { .. }));
}
