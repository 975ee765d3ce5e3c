use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::constants::limits;
use crate::models::{
    ContinueWatching, NewReview, NewTitle, NewUser, NewWatchProgress, NewWatchlistEntry, Review,
    Title, User, WatchProgress, WatchlistEntry,
};
use crate::services::{RandomRecommender, Recommender};

pub mod error;
pub mod repositories;
pub mod seed;
pub mod table;

pub use error::StoreError;
pub use repositories::progress::UpsertOutcome;
use table::Table;

/// In-memory repository store for users, the title catalog and per-user
/// watchlists, playback progress and reviews.
///
/// Each collection sits behind its own lock, so a write to one collection
/// never blocks reads of another. Cloning is cheap and every clone shares the
/// same data; build one at startup and hand clones to whoever needs it.
#[derive(Clone)]
pub struct Store {
    users: Arc<RwLock<Table<User>>>,
    titles: Arc<RwLock<Table<Title>>>,
    watchlist: Arc<RwLock<Table<WatchlistEntry>>>,
    progress: Arc<RwLock<Table<WatchProgress>>>,
    reviews: Arc<RwLock<Table<Review>>>,
    recommender: Arc<dyn Recommender>,
    strict_references: bool,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("strict_references", &self.strict_references)
            .finish_non_exhaustive()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Arc::new(RandomRecommender::default()), false)
    }

    /// `strict_references` makes inserts that carry a user or title id fail
    /// with [`StoreError::MissingUser`] / [`StoreError::MissingTitle`] when
    /// the referenced row does not exist.
    #[must_use]
    pub fn with_options(recommender: Arc<dyn Recommender>, strict_references: bool) -> Self {
        Self {
            users: Arc::default(),
            titles: Arc::default(),
            watchlist: Arc::default(),
            progress: Arc::default(),
            reviews: Arc::default(),
            recommender,
            strict_references,
        }
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.users.clone())
    }

    fn title_repo(&self) -> repositories::title::TitleRepository {
        repositories::title::TitleRepository::new(self.titles.clone())
    }

    fn watchlist_repo(&self) -> repositories::watchlist::WatchlistRepository {
        repositories::watchlist::WatchlistRepository::new(self.watchlist.clone())
    }

    fn progress_repo(&self) -> repositories::progress::ProgressRepository {
        repositories::progress::ProgressRepository::new(self.progress.clone())
    }

    fn review_repo(&self) -> repositories::review::ReviewRepository {
        repositories::review::ReviewRepository::new(self.reviews.clone())
    }

    async fn check_references(&self, user_id: i32, movie_id: i32) -> Result<(), StoreError> {
        if !self.strict_references {
            return Ok(());
        }

        if !self.user_repo().exists(user_id).await {
            warn!(user_id, "Rejected write referencing unknown user");
            return Err(StoreError::MissingUser(user_id));
        }

        if !self.title_repo().exists(movie_id).await {
            warn!(movie_id, "Rejected write referencing unknown title");
            return Err(StoreError::MissingTitle(movie_id));
        }

        Ok(())
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn get_user(&self, id: i32) -> Option<User> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.user_repo().get_by_email(email).await
    }

    /// Uniqueness of username and email is left to the caller.
    pub async fn create_user(&self, data: NewUser) -> User {
        self.user_repo().create(data).await
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    pub async fn get_all_movies(&self) -> Vec<Title> {
        self.title_repo().list_by_kind(true).await
    }

    pub async fn get_movie_by_id(&self, id: i32) -> Option<Title> {
        self.title_repo().get(id).await
    }

    pub async fn get_trending_movies(&self) -> Vec<Title> {
        let candidates = self.get_all_movies().await;
        self.recommender.trending(candidates)
    }

    /// `user_id` is handed to the recommender, which may ignore it.
    pub async fn get_recommended_movies(&self, user_id: Option<i32>) -> Vec<Title> {
        let candidates = self.get_all_movies().await;
        self.recommender.recommended(candidates, user_id)
    }

    pub async fn get_tv_shows(&self) -> Vec<Title> {
        self.title_repo().list_by_kind(false).await
    }

    /// Up to six movies in the reference title's genre. `None` when the
    /// reference title does not exist.
    pub async fn get_similar_movies(&self, id: i32) -> Option<Vec<Title>> {
        let repo = self.title_repo();
        let reference = repo.get(id).await?;
        Some(repo.list_similar(&reference, limits::SIMILAR_TITLES).await)
    }

    pub async fn create_movie(&self, data: NewTitle) -> Title {
        self.title_repo().create(data).await
    }

    pub async fn title_count(&self) -> usize {
        self.title_repo().count().await
    }

    // ========================================================================
    // Watchlist
    // ========================================================================

    /// Resolves the user's watchlist to titles, in the order they were added.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DanglingReference`] if any entry points at a
    /// title that does not exist. Entries are never skipped silently.
    pub async fn get_user_watchlist(&self, user_id: i32) -> Result<Vec<Title>, StoreError> {
        let entries = self.watchlist_repo().list_for_user(user_id).await;
        let titles = self.titles.read().await;

        entries
            .iter()
            .map(|entry| {
                titles.get(entry.movie_id).cloned().ok_or_else(|| {
                    error!(
                        entry_id = entry.id,
                        movie_id = entry.movie_id,
                        "Watchlist entry references a missing title"
                    );
                    StoreError::DanglingReference {
                        entry_id: entry.id,
                        movie_id: entry.movie_id,
                    }
                })
            })
            .collect()
    }

    /// # Errors
    ///
    /// Fails only when reference validation is enabled and the user or title
    /// is unknown.
    pub async fn add_to_watchlist(
        &self,
        data: NewWatchlistEntry,
    ) -> Result<WatchlistEntry, StoreError> {
        self.check_references(data.user_id, data.movie_id).await?;
        Ok(self.watchlist_repo().add(data).await)
    }

    /// Removes at most one matching entry. Returns whether one was removed.
    pub async fn remove_from_watchlist(&self, user_id: i32, movie_id: i32) -> bool {
        self.watchlist_repo().remove_first(user_id, movie_id).await
    }

    // ========================================================================
    // Watch progress
    // ========================================================================

    pub async fn get_user_watch_progress(&self, user_id: i32) -> Vec<WatchProgress> {
        self.progress_repo().list_for_user(user_id).await
    }

    /// Upserts the progress record for `(user_id, movie_id)`. An existing
    /// record keeps its identity.
    ///
    /// # Errors
    ///
    /// Fails only when reference validation is enabled and the user or title
    /// is unknown.
    pub async fn update_watch_progress(
        &self,
        data: NewWatchProgress,
    ) -> Result<WatchProgress, StoreError> {
        self.check_references(data.user_id, data.movie_id).await?;

        let (progress, outcome) = self.progress_repo().upsert(data).await;
        metrics::counter!("watch_progress_upserts_total", "outcome" => outcome.as_str())
            .increment(1);

        Ok(progress)
    }

    /// Titles the user has started but not finished, most recently watched
    /// first. Progress rows whose title is gone are skipped.
    pub async fn get_continue_watching(&self, user_id: i32) -> Vec<ContinueWatching> {
        let mut records = self.progress_repo().list_for_user(user_id).await;
        records.retain(|progress| progress.progress_percentage < 100);
        records.sort_by(|a, b| b.last_watched.cmp(&a.last_watched).then(b.id.cmp(&a.id)));

        let titles = self.titles.read().await;
        records
            .iter()
            .filter_map(|progress| match titles.get(progress.movie_id) {
                Some(title) => Some(ContinueWatching::new(title.clone(), progress)),
                None => {
                    debug!(
                        progress_id = progress.id,
                        movie_id = progress.movie_id,
                        "Skipping progress for a missing title"
                    );
                    None
                }
            })
            .collect()
    }

    // ========================================================================
    // Reviews
    // ========================================================================

    pub async fn get_movie_reviews(&self, movie_id: i32) -> Vec<Review> {
        self.review_repo().list_for_title(movie_id).await
    }

    /// # Errors
    ///
    /// Fails only when reference validation is enabled and the user or title
    /// is unknown.
    pub async fn add_review(&self, data: NewReview) -> Result<Review, StoreError> {
        self.check_references(data.user_id, data.movie_id).await?;
        Ok(self.review_repo().add(data).await)
    }
}
