use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::db::table::Table;
use crate::models::{NewWatchlistEntry, WatchlistEntry};

/// Repository for "My List" entries
pub struct WatchlistRepository {
    table: Arc<RwLock<Table<WatchlistEntry>>>,
}

impl WatchlistRepository {
    #[must_use]
    pub const fn new(table: Arc<RwLock<Table<WatchlistEntry>>>) -> Self {
        Self { table }
    }

    pub async fn list_for_user(&self, user_id: i32) -> Vec<WatchlistEntry> {
        self.table
            .read()
            .await
            .values()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Unconditional insert; the same pair may be saved more than once.
    pub async fn add(&self, data: NewWatchlistEntry) -> WatchlistEntry {
        let now = Utc::now();
        let entry = self
            .table
            .write()
            .await
            .insert_with(|id| data.into_entry(id, now));

        debug!(
            entry_id = entry.id,
            user_id = entry.user_id,
            movie_id = entry.movie_id,
            "Added watchlist entry"
        );
        entry
    }

    /// Removes the first entry matching the pair and stops there. Returns
    /// whether anything was removed.
    pub async fn remove_first(&self, user_id: i32, movie_id: i32) -> bool {
        let mut table = self.table.write().await;

        let Some(id) =
            table.find_id(|entry| entry.user_id == user_id && entry.movie_id == movie_id)
        else {
            return false;
        };

        table.remove(id);
        debug!(entry_id = id, user_id, movie_id, "Removed watchlist entry");
        true
    }
}
