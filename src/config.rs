use anyhow::{Context, Result};
use serde::Deserialize;

use crate::rest::USGS_EVENT_ENDPOINT;

#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub save_logs: bool,
    pub log_file_path: String,
    pub rewrite_last_logs: bool,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Load configuration: built-in defaults, overridden by an optional
/// `config.{toml,...}` file in the working directory.
pub fn load_config() -> Result<AppConfig> {
    config::Config::builder()
        .set_default("catalog.base_url", USGS_EVENT_ENDPOINT)?
        .set_default("catalog.timeout_secs", 30_i64)?
        .set_default("logging.level", "info")?
        .set_default("logging.save_logs", false)?
        .set_default("logging.log_file_path", "logs/quakefetch.log")?
        .set_default("logging.rewrite_last_logs", true)?
        .add_source(config::File::with_name("config").required(false))
        .build()
        .context("error while loading config")?
        .try_deserialize()
        .context("error when deserializing the configuration")
}
