use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::Title;

/// Playback position of one user on one title. The store keeps at most one
/// record per `(user_id, movie_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchProgress {
    pub id: i32,
    pub user_id: i32,
    pub movie_id: i32,
    /// Expected in `0..=100`, stored as given.
    pub progress_percentage: i32,
    /// Seconds into the title.
    pub current_time: i32,
    pub season: Option<i32>,
    pub episode: Option<i32>,
    pub last_watched: DateTime<Utc>,
}

/// `season` and `episode` are tri-state: `None` when the key was absent,
/// `Some(None)` for an explicit `null`, `Some(Some(n))` for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWatchProgress {
    pub user_id: i32,
    pub movie_id: i32,
    pub progress_percentage: i32,
    pub current_time: i32,
    #[serde(default, deserialize_with = "present")]
    pub season: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub episode: Option<Option<i32>>,
}

/// Marks a key that was present in the payload, even when its value is `null`.
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer).map(Some)
}

impl NewWatchProgress {
    #[must_use]
    pub fn into_progress(self, id: i32, last_watched: DateTime<Utc>) -> WatchProgress {
        WatchProgress {
            id,
            user_id: self.user_id,
            movie_id: self.movie_id,
            progress_percentage: self.progress_percentage,
            current_time: self.current_time,
            season: self.season.flatten(),
            episode: self.episode.flatten(),
            last_watched,
        }
    }

    #[must_use]
    pub const fn matches(&self, progress: &WatchProgress) -> bool {
        self.user_id == progress.user_id && self.movie_id == progress.movie_id
    }
}

impl WatchProgress {
    /// Merges an incoming payload over this record, keeping its identity.
    ///
    /// Season and episode keep their value only when the payload omits the
    /// key; an explicit `null` clears them. `last_watched` never moves
    /// backwards.
    pub fn merge(&mut self, incoming: NewWatchProgress, now: DateTime<Utc>) {
        self.progress_percentage = incoming.progress_percentage;
        self.current_time = incoming.current_time;
        if let Some(season) = incoming.season {
            self.season = season;
        }
        if let Some(episode) = incoming.episode {
            self.episode = episode;
        }
        self.last_watched = now.max(self.last_watched);
    }
}

/// A title the user has started, with where they left off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueWatching {
    #[serde(flatten)]
    pub title: Title,
    pub progress_percentage: i32,
    pub current_time: i32,
    pub season: Option<i32>,
    pub episode: Option<i32>,
    /// `"S1:E4"` when both season and episode are known.
    pub episode_info: Option<String>,
    pub last_watched: DateTime<Utc>,
}

impl ContinueWatching {
    #[must_use]
    pub fn new(title: Title, progress: &WatchProgress) -> Self {
        let episode_info = match (progress.season, progress.episode) {
            (Some(season), Some(episode)) => Some(format!("S{season}:E{episode}")),
            _ => None,
        };

        Self {
            title,
            progress_percentage: progress.progress_percentage,
            current_time: progress.current_time,
            season: progress.season,
            episode: progress.episode,
            episode_info,
            last_watched: progress.last_watched,
        }
    }
}
