use std::num::NonZeroUsize;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GameError, GameResult};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PipelineConfig {
    /// Number of batches, and therefore worker threads, in file mode.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

fn default_workers() -> usize {
    16
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Body the service sends in place of a missing boxscore.
    #[serde(default = "default_not_found_sentinel")]
    pub not_found_sentinel: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout. Absent means requests may block indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            not_found_sentinel: default_not_found_sentinel(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "http://gd2.mlb.com/components/game/mlb".to_string()
}
fn default_not_found_sentinel() -> String {
    "GameDay - 404 Not Found".to_string()
}
fn default_user_agent() -> String {
    concat!("gameday/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Config {
    pub fn workers(&self) -> GameResult<NonZeroUsize> {
        NonZeroUsize::new(self.pipeline.workers)
            .ok_or_else(|| GameError::Config("pipeline.workers must be > 0".to_string()))
    }

    pub fn validate(&self) -> GameResult<()> {
        self.workers()?;
        if self.remote.base_url.trim().is_empty() {
            return Err(GameError::Config("remote.base_url must not be empty".to_string()));
        }
        if self.remote.not_found_sentinel.is_empty() {
            return Err(GameError::Config(
                "remote.not_found_sentinel must not be empty".to_string(),
            ));
        }
        if self.remote.timeout_secs == Some(0) {
            return Err(GameError::Config(
                "remote.timeout_secs must be > 0 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a TOML config. `None` gives the built-in defaults.
pub fn load_config(path: Option<&Path>) -> GameResult<Config> {
    let config = match path {
        None => Config::default(),
        Some(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|e| GameError::io(path, e))?;
            toml::from_str(&content).map_err(|e| {
                GameError::Config(format!("failed to parse {}: {}", path.display(), e))
            })?
        }
    };
    config.validate()?;
    Ok(config)
}
