use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::db::table::Table;
use crate::models::{NewWatchProgress, WatchProgress};

/// Whether an upsert touched an existing record or created one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

impl UpsertOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "insert",
            Self::Updated => "update",
        }
    }
}

/// Repository for playback positions
pub struct ProgressRepository {
    table: Arc<RwLock<Table<WatchProgress>>>,
}

impl ProgressRepository {
    #[must_use]
    pub const fn new(table: Arc<RwLock<Table<WatchProgress>>>) -> Self {
        Self { table }
    }

    pub async fn list_for_user(&self, user_id: i32) -> Vec<WatchProgress> {
        self.table
            .read()
            .await
            .values()
            .filter(|progress| progress.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Upsert keyed on `(user_id, movie_id)`. A matching record is merged in
    /// place and keeps its identity; otherwise a new record is inserted.
    /// Lookup and write happen under one write lock.
    pub async fn upsert(&self, data: NewWatchProgress) -> (WatchProgress, UpsertOutcome) {
        let now = Utc::now();
        let mut table = self.table.write().await;

        if let Some(existing) = table
            .find_id(|progress| data.matches(progress))
            .and_then(|id| table.get_mut(id))
        {
            existing.merge(data, now);
            return (existing.clone(), UpsertOutcome::Updated);
        }

        let created = table.insert_with(|id| data.into_progress(id, now));
        (created, UpsertOutcome::Inserted)
    }
}
