use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::db::table::Table;
use crate::models::{NewUser, User};

/// Repository for user accounts
pub struct UserRepository {
    table: Arc<RwLock<Table<User>>>,
}

impl UserRepository {
    #[must_use]
    pub const fn new(table: Arc<RwLock<Table<User>>>) -> Self {
        Self { table }
    }

    pub async fn get_by_id(&self, id: i32) -> Option<User> {
        self.table.read().await.get(id).cloned()
    }

    /// Exact, case-sensitive username match
    pub async fn get_by_username(&self, username: &str) -> Option<User> {
        self.table
            .read()
            .await
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        self.table
            .read()
            .await
            .values()
            .find(|user| user.email == email)
            .cloned()
    }

    pub async fn exists(&self, id: i32) -> bool {
        self.table.read().await.get(id).is_some()
    }

    /// Inserts without any uniqueness check.
    pub async fn create(&self, data: NewUser) -> User {
        let now = Utc::now();
        let user = self
            .table
            .write()
            .await
            .insert_with(|id| data.into_user(id, now));

        info!(user_id = user.id, username = %user.username, "Created user");
        user
    }
}
