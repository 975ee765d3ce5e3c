//! Config bootstrap command handler

use std::path::Path;

use crate::config::Config;

pub fn cmd_init_config(path: Option<&Path>) -> anyhow::Result<()> {
    let default_path = Config::default_config_path();
    let path = path.unwrap_or(&default_path);

    if Config::create_default_if_missing(path)? {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}, leaving it untouched", path.display());
    }

    Ok(())
}
