//! Catalog seeding at startup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::Store;
use crate::config::CatalogConfig;
use crate::models::NewTitle;

const SAMPLE_CATALOG: &str = include_str!("../../assets/catalog.json");

/// The built-in catalog: 17 movies followed by 8 series.
pub fn sample_catalog() -> Result<Vec<NewTitle>> {
    serde_json::from_str(SAMPLE_CATALOG).context("Built-in sample catalog is malformed")
}

pub fn load_catalog(path: &Path) -> Result<Vec<NewTitle>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

/// Seeds `store` according to `config`. Returns the number of titles added.
pub async fn seed_store(store: &Store, config: &CatalogConfig) -> Result<usize> {
    if !config.seed_sample_data {
        return Ok(0);
    }

    let titles = match &config.seed_path {
        Some(path) => load_catalog(Path::new(path))?,
        None => sample_catalog()?,
    };

    let count = titles.len();
    for title in titles {
        store.create_movie(title).await;
    }

    info!(titles = count, "Seeded catalog");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_parses() {
        let titles = sample_catalog().unwrap();
        assert_eq!(titles.len(), 25);
        assert_eq!(titles.iter().filter(|t| t.is_movie).count(), 17);
        assert!(
            titles
                .iter()
                .filter(|t| !t.is_movie)
                .all(|t| t.season_count.is_some() && t.episode_count.is_some())
        );
    }

    #[tokio::test]
    async fn seed_assigns_sequential_ids() {
        let store = Store::new();

        let added = seed_store(&store, &CatalogConfig::default()).await.unwrap();

        assert_eq!(added, 25);
        let first = store.get_movie_by_id(1).await.unwrap();
        assert_eq!(first.title, "Cosmic Horizon");
        assert_eq!(store.get_all_movies().await.len(), 17);
        assert_eq!(store.get_tv_shows().await.len(), 8);
    }

    #[tokio::test]
    async fn seeding_can_be_disabled() {
        let store = Store::new();
        let config = CatalogConfig {
            seed_sample_data: false,
            ..CatalogConfig::default()
        };

        assert_eq!(seed_store(&store, &config).await.unwrap(), 0);
        assert_eq!(store.title_count().await, 0);
    }

    #[tokio::test]
    async fn seed_from_file() {
        let path = std::env::temp_dir().join(format!("reelhub-catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[{"title":"Only One","year":"2020","genre":"Drama","duration":"1h","posterUrl":"p.jpg"}]"#,
        )
        .unwrap();

        let store = Store::new();
        let config = CatalogConfig {
            seed_path: Some(path.display().to_string()),
            ..CatalogConfig::default()
        };

        assert_eq!(seed_store(&store, &config).await.unwrap(), 1);
        assert_eq!(store.get_all_movies().await[0].title, "Only One");

        let _ = std::fs::remove_file(path);
    }
}
