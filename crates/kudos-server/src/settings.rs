//! Runtime server configuration, deserialised from `config.toml` and
//! `KUDOS_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use kudos_core::page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:              String,
  pub port:              u16,
  pub store_path:        PathBuf,
  pub default_page_size: u32,
  pub max_page_size:     u32,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:              "127.0.0.1".to_string(),
      port:              8080,
      store_path:        PathBuf::from("kudos.db"),
      default_page_size: DEFAULT_PAGE_SIZE,
      max_page_size:     MAX_PAGE_SIZE,
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file under the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("KUDOS"))
      .build()
      .context("failed to read config file")?;

    let cfg: ServerConfig = settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")?;

    anyhow::ensure!(cfg.max_page_size > 0, "max_page_size must be at least 1");
    anyhow::ensure!(
      (1..=cfg.max_page_size).contains(&cfg.default_page_size),
      "default_page_size must be between 1 and max_page_size ({})",
      cfg.max_page_size
    );
    Ok(cfg)
  }

  pub fn page_limits(&self) -> PageLimits {
    PageLimits { default_size: self.default_page_size, max_size: self.max_page_size }
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
