use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub user_id: i32,
    pub movie_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

impl NewReview {
    #[must_use]
    pub fn into_review(self, id: i32, created_at: DateTime<Utc>) -> Review {
        Review {
            id,
            user_id: self.user_id,
            movie_id: self.movie_id,
            rating: self.rating,
            comment: self.comment,
            created_at,
        }
    }
}
