//! Command handlers

mod catalog;
mod init_config;
mod serve;

pub use catalog::cmd_catalog;
pub use init_config::cmd_init_config;
pub use serve::cmd_serve;
