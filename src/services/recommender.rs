//! Selection of "trending" and "recommended" titles.
//!
//! No ranking signal exists yet: the default implementation draws a bounded
//! random sample of movies. Implement [`Recommender`] to plug in real ranking
//! (view counts, ratings, watch history) without touching the store.

use rand::seq::SliceRandom;

use crate::constants::limits;
use crate::models::Title;

pub trait Recommender: Send + Sync {
    /// Picks trending titles out of `candidates` (all movie-type titles).
    fn trending(&self, candidates: Vec<Title>) -> Vec<Title>;

    /// Picks titles for `user_id`, or for an anonymous visitor.
    fn recommended(&self, candidates: Vec<Title>, user_id: Option<i32>) -> Vec<Title>;
}

/// Uniform random sample, capped per list.
#[derive(Debug, Clone, Copy)]
pub struct RandomRecommender {
    trending_limit: usize,
    recommended_limit: usize,
}

impl Default for RandomRecommender {
    fn default() -> Self {
        Self::new(limits::TRENDING_TITLES, limits::RECOMMENDED_TITLES)
    }
}

impl RandomRecommender {
    #[must_use]
    pub const fn new(trending_limit: usize, recommended_limit: usize) -> Self {
        Self {
            trending_limit,
            recommended_limit,
        }
    }

    fn sample(mut candidates: Vec<Title>, limit: usize) -> Vec<Title> {
        candidates.shuffle(&mut rand::rng());
        candidates.truncate(limit);
        candidates
    }
}

impl Recommender for RandomRecommender {
    fn trending(&self, candidates: Vec<Title>) -> Vec<Title> {
        Self::sample(candidates, self.trending_limit)
    }

    // TODO: weight the sample by the genres on the user's watchlist.
    fn recommended(&self, candidates: Vec<Title>, _user_id: Option<i32>) -> Vec<Title> {
        Self::sample(candidates, self.recommended_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTitle;
    use chrono::Utc;
    use std::collections::HashSet;

    fn catalog(size: i32) -> Vec<Title> {
        (1..=size)
            .map(|id| {
                NewTitle {
                    title: format!("Title {id}"),
                    year: "2023".to_string(),
                    genre: "Drama".to_string(),
                    duration: "1h 30m".to_string(),
                    rating: None,
                    poster_url: String::new(),
                    backdrop_url: None,
                    description: None,
                    director: None,
                    cast: None,
                    trailer_url: None,
                    is_movie: true,
                    season_count: None,
                    episode_count: None,
                }
                .into_title(id, Utc::now())
            })
            .collect()
    }

    #[test]
    fn sample_is_capped_and_distinct() {
        let recommender = RandomRecommender::new(4, 2);

        let trending = recommender.trending(catalog(20));
        let ids: HashSet<i32> = trending.iter().map(|t| t.id).collect();

        assert_eq!(trending.len(), 4);
        assert_eq!(ids.len(), 4);
        assert_eq!(recommender.recommended(catalog(20), None).len(), 2);
    }

    #[test]
    fn sample_of_empty_catalog_is_empty() {
        let recommender = RandomRecommender::default();
        assert!(recommender.trending(Vec::new()).is_empty());
        assert!(recommender.recommended(Vec::new(), Some(3)).is_empty());
    }
}
