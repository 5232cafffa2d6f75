//! User service - Handles user-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a user from the given username and email
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.repo.list().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        tracing::debug!(username = %new_user.username, "Creating user");
        self.repo.create(new_user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::errors::AppError;
    use crate::infra::MockUserRepository;

    fn test_user(id: i32, username: &str, email: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_users_returns_repository_rows() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().times(1).returning(|| {
            Ok(vec![
                test_user(1, "alice", "a@x.com"),
                test_user(2, "bob", "b@x.com"),
            ])
        });

        let service = UserManager::new(Arc::new(repo));
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[1].email, "b@x.com");
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_user_passes_fields_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(NewUser::new("alice", "a@x.com")))
            .times(1)
            .returning(|new_user| Ok(test_user(1, &new_user.username, &new_user.email)));

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(NewUser::new("alice", "a@x.com"))
            .await
            .unwrap();

        assert_eq!(user, test_user(1, "alice", "a@x.com"));
    }

    #[tokio::test]
    async fn test_create_user_accepts_empty_strings() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(NewUser::new("", "")))
            .returning(|new_user| Ok(test_user(3, &new_user.username, &new_user.email)));

        let service = UserManager::new(Arc::new(repo));
        let user = service.create_user(NewUser::new("", "")).await.unwrap();

        assert_eq!(user.id, 3);
        assert!(user.username.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_propagates_database_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::from(sea_orm::DbErr::Custom("disk full".into()))));

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(NewUser::new("alice", "a@x.com")).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
