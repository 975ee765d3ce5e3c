use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One saved title on a user's list. Duplicate `(user_id, movie_id)` rows
/// are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWatchlistEntry {
    pub user_id: i32,
    pub movie_id: i32,
}

impl NewWatchlistEntry {
    #[must_use]
    pub const fn into_entry(self, id: i32, added_at: DateTime<Utc>) -> WatchlistEntry {
        WatchlistEntry {
            id,
            user_id: self.user_id,
            movie_id: self.movie_id,
            added_at,
        }
    }
}
