pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod models;
pub mod services;
pub mod state;

use anyhow::Context;
use cli::{Cli, Commands};
pub use config::Config;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A config together with the file it came from. `source` is `None` when no
/// file was found and defaults are in use.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

/// Loads the config named on the command line, or searches the default
/// locations. Runs before logging is set up, so it does not log.
pub fn load_config(cli: &Cli) -> anyhow::Result<LoadedConfig> {
    let source = cli.config.clone().or_else(Config::find_path);
    let config = match &source {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };

    Ok(LoadedConfig { config, source })
}

pub async fn run(cli: Cli, loaded: LoadedConfig) -> anyhow::Result<()> {
    let LoadedConfig { config, source } = loaded;
    config.validate()?;
    init_tracing(&config);

    match &source {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let prometheus_handle = install_metrics_recorder(&config)?;
            cli::commands::cmd_serve(config, prometheus_handle).await
        }
        Commands::Catalog { tv, genre } => {
            cli::commands::cmd_catalog(&config, tv, genre.as_deref()).await
        }
        Commands::InitConfig { path } => cli::commands::cmd_init_config(path.as_deref()),
    }
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let json = config.general.json_logs;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

fn install_metrics_recorder(config: &Config) -> anyhow::Result<Option<PrometheusHandle>> {
    if !config.observability.metrics_enabled {
        return Ok(None);
    }

    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;
    info!("Prometheus metrics recorder initialized");

    Ok(Some(handle))
}
