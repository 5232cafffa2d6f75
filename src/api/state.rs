//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state shared by every handler.
///
/// Holds only cloneable handles; no request data lives here.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection pool
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the repository and service on top of an open database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(user_repo));

        Self {
            user_service,
            database,
        }
    }
}
