//! Catalog listing command handler

use crate::config::Config;
use crate::db::seed;
use crate::state::build_store;

pub async fn cmd_catalog(config: &Config, tv: bool, genre: Option<&str>) -> anyhow::Result<()> {
    let store = build_store(config);
    seed::seed_store(&store, &config.catalog).await?;

    let titles = if tv {
        store.get_tv_shows().await
    } else {
        store.get_all_movies().await
    };

    let titles: Vec<_> = titles
        .into_iter()
        .filter(|t| genre.is_none_or(|g| t.genre == g))
        .collect();

    let kind = if tv { "Series" } else { "Movies" };

    if titles.is_empty() {
        println!("No {} in the catalog.", kind.to_lowercase());
        return Ok(());
    }

    println!("{} ({} total)", kind, titles.len());
    println!("{:-<70}", "");

    for title in titles {
        let extra = match (title.season_count, title.episode_count) {
            (Some(seasons), Some(episodes)) => format!(" | S{seasons} E{episodes}"),
            _ => String::new(),
        };

        println!("{} ({})", title.title, title.year);
        println!(
            "  ID: {} | Genre: {} | Duration: {}{}",
            title.id, title.genre, title.duration, extra
        );
    }

    Ok(())
}
