//! Settings: defaults, then config file, then `EUROVISOR_*` environment,
//! then command-line flags

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use directories::ProjectDirs;
use eurovisor_core::application::constants::DEFAULT_BATCH_SIZE;
use eurovisor_core::application::FetchOptions;
use eurovisor_infra_http::{HttpApiConfig, DEFAULT_API_BASE_URL};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const ENV_PREFIX: &str = "EUROVISOR";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: Option<String>,
    pub batch_size: usize,
    pub resolve_videos: bool,
}

impl Settings {
    pub fn http_config(&self) -> HttpApiConfig {
        let mut config = HttpApiConfig::default().with_base_url(self.api_base_url.clone());
        config.timeout = Duration::from_secs(self.request_timeout_secs);
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            batch_size: self.batch_size,
            resolve_videos: self.resolve_videos,
        }
    }
}

/// `~/.config/eurovisor/config.toml` (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "eurovisor", "eurovisor")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("api_base_url", DEFAULT_API_BASE_URL)?
        .set_default("request_timeout_secs", 30_i64)?
        .set_default("batch_size", DEFAULT_BATCH_SIZE as i64)?
        .set_default("resolve_videos", false)?)
}

/// Load settings. An explicit file must exist; the default one is optional.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let mut builder = defaults()?;

    match explicit {
        Some(path) => {
            builder = builder.add_source(File::from(path).required(true));
        }
        None => {
            if let Some(path) = default_config_path() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }
    }

    builder
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")
}
