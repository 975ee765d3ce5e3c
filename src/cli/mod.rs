//! CLI module - Command-line interface for Reelhub
//!
//! This module provides a structured CLI using clap for argument parsing.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reelhub - streaming catalog backend
#[derive(Debug, Parser)]
#[command(name = "reelhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to load instead of searching the default locations
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the HTTP API until interrupted (default)
    #[command(alias = "daemon")]
    Serve,

    /// Print the seeded catalog
    #[command(alias = "ls")]
    Catalog {
        /// List series instead of movies
        #[arg(long)]
        tv: bool,

        /// Only show titles in this genre
        #[arg(long)]
        genre: Option<String>,
    },

    /// Write a default config file if none exists
    InitConfig {
        /// Where to write it (default: ./config.toml)
        path: Option<PathBuf>,
    },
}
