use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::db::table::Table;
use crate::models::{NewReview, Review};

/// Repository for title reviews
pub struct ReviewRepository {
    table: Arc<RwLock<Table<Review>>>,
}

impl ReviewRepository {
    #[must_use]
    pub const fn new(table: Arc<RwLock<Table<Review>>>) -> Self {
        Self { table }
    }

    pub async fn list_for_title(&self, movie_id: i32) -> Vec<Review> {
        self.table
            .read()
            .await
            .values()
            .filter(|review| review.movie_id == movie_id)
            .cloned()
            .collect()
    }

    /// Unconditional insert; rating range is not checked here.
    pub async fn add(&self, data: NewReview) -> Review {
        let now = Utc::now();
        let review = self
            .table
            .write()
            .await
            .insert_with(|id| data.into_review(id, now));

        debug!(
            review_id = review.id,
            movie_id = review.movie_id,
            rating = review.rating,
            "Added review"
        );
        review
    }
}
