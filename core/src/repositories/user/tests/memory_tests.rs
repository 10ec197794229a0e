//! Unit tests for the in-memory user repository

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::user::{InMemoryUserRepository, UserRepository};

#[tokio::test]
async fn test_save_assigns_increasing_ids() {
    let repo = InMemoryUserRepository::new();

    let first = repo.save(User::new("Name", "test@test.ru")).await.unwrap();
    let second = repo.save(User::new("Name 2", "test2@test.ru")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(repo.find_by_id(2).await.unwrap(), Some(second));
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let repo = InMemoryUserRepository::new();
    repo.save(User::new("Name", "test@test.ru")).await.unwrap();

    let result = repo.save(User::new("Other", "test@test.ru")).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_update_keeps_own_email() {
    let repo = InMemoryUserRepository::new();
    let mut user = repo.save(User::new("Name", "test@test.ru")).await.unwrap();

    user.name = "Renamed".to_string();
    let updated = repo.save(user).await.unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_unknown_user() {
    let repo = InMemoryUserRepository::new();
    let result = repo.save(User::new("Ghost", "ghost@test.ru").with_id(42)).await;
    assert_eq!(result.unwrap_err(), DomainError::not_found("User not found"));
}

#[tokio::test]
async fn test_find_by_email_and_delete() {
    let repo = InMemoryUserRepository::new();
    let user = repo.save(User::new("Name", "test@test.ru")).await.unwrap();

    assert_eq!(repo.find_by_email("test@test.ru").await.unwrap(), Some(user.clone()));
    assert!(repo.delete(user.id).await.unwrap());
    assert!(!repo.delete(user.id).await.unwrap());
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failure_switch() {
    let repo = InMemoryUserRepository::new();
    repo.set_should_fail(true);

    let result = repo.find_by_id(1).await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}
