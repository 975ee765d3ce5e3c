use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::db::{Store, seed};
use crate::services::{AuthService, RandomRecommender, StoreAuthService};

/// Everything the request handlers share. Built once at startup and passed
/// down explicitly; there is no process-wide store.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,
}

impl SharedState {
    /// Validates `config`, builds the store from it and seeds the catalog.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let store = build_store(&config);
        seed::seed_store(&store, &config.catalog).await?;

        Ok(Self::with_store(config, store))
    }

    /// Wraps an existing store without seeding it.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let auth_service =
            Arc::new(StoreAuthService::new(store.clone())) as Arc<dyn AuthService + 'static>;

        Self {
            config: Arc::new(config),
            store,
            auth_service,
        }
    }
}

#[must_use]
pub fn build_store(config: &Config) -> Store {
    let recommender = RandomRecommender::new(
        config.catalog.trending_limit,
        config.catalog.recommended_limit,
    );

    if config.catalog.strict_references {
        info!("Reference validation enabled for watchlist, progress and review writes");
    }

    Store::with_options(Arc::new(recommender), config.catalog.strict_references)
}
