//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every stored user, in whatever order the store returns them
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a user and return the persisted row with its generated id
    async fn create(&self, new_user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserRepository over a SeaORM connection pool
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        // insert() hands back the stored row, generated id included, on the same
        // transaction; dropping it uncommitted rolls back
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let active_model = ActiveModel {
            username: Set(new_user.username),
            email: Set(new_user.email),
            ..Default::default()
        };

        let model = active_model.insert(&txn).await.map_err(AppError::from)?;
        txn.commit().await.map_err(AppError::from)?;

        tracing::debug!(user_id = model.id, "User row persisted");
        Ok(User::from(model))
    }
}
