use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry. `is_movie` splits the catalog into movies and series;
/// `season_count` and `episode_count` only carry meaning for series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub id: i32,
    pub title: String,
    pub year: String,
    pub genre: String,
    pub duration: String,
    pub rating: Option<String>,
    pub poster_url: String,
    pub backdrop_url: Option<String>,
    pub description: Option<String>,
    pub director: Option<String>,
    pub cast: Option<Vec<String>>,
    pub trailer_url: Option<String>,
    pub is_movie: bool,
    pub season_count: Option<i32>,
    pub episode_count: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTitle {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub duration: String,
    pub rating: Option<String>,
    pub poster_url: String,
    pub backdrop_url: Option<String>,
    pub description: Option<String>,
    pub director: Option<String>,
    pub cast: Option<Vec<String>>,
    pub trailer_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_movie: bool,
    pub season_count: Option<i32>,
    pub episode_count: Option<i32>,
}

const fn default_true() -> bool {
    true
}

impl NewTitle {
    #[must_use]
    pub fn into_title(self, id: i32, created_at: DateTime<Utc>) -> Title {
        Title {
            id,
            title: self.title,
            year: self.year,
            genre: self.genre,
            duration: self.duration,
            rating: self.rating,
            poster_url: self.poster_url,
            backdrop_url: self.backdrop_url,
            description: self.description,
            director: self.director,
            cast: self.cast,
            trailer_url: self.trailer_url,
            is_movie: self.is_movie,
            season_count: self.season_count,
            episode_count: self.episode_count,
            created_at,
        }
    }
}
