use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::db::table::Table;
use crate::models::{NewTitle, Title};

/// Repository for catalog titles (movies and series)
pub struct TitleRepository {
    table: Arc<RwLock<Table<Title>>>,
}

impl TitleRepository {
    #[must_use]
    pub const fn new(table: Arc<RwLock<Table<Title>>>) -> Self {
        Self { table }
    }

    pub async fn get(&self, id: i32) -> Option<Title> {
        self.table.read().await.get(id).cloned()
    }

    pub async fn exists(&self, id: i32) -> bool {
        self.table.read().await.get(id).is_some()
    }

    /// All titles of one kind, in insertion order.
    pub async fn list_by_kind(&self, is_movie: bool) -> Vec<Title> {
        self.table
            .read()
            .await
            .values()
            .filter(|title| title.is_movie == is_movie)
            .cloned()
            .collect()
    }

    /// Movies sharing the genre of `reference`, excluding it. The reference
    /// itself may be a series.
    pub async fn list_similar(&self, reference: &Title, limit: usize) -> Vec<Title> {
        self.table
            .read()
            .await
            .values()
            .filter(|title| {
                title.is_movie && title.id != reference.id && title.genre == reference.genre
            })
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn create(&self, data: NewTitle) -> Title {
        let now = Utc::now();
        let title = self
            .table
            .write()
            .await
            .insert_with(|id| data.into_title(id, now));

        debug!(title_id = title.id, title = %title.title, "Added title to catalog");
        title
    }

    pub async fn count(&self) -> usize {
        self.table.read().await.len()
    }
}
