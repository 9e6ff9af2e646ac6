//! Server configuration: optional TOML file overlaid by `PEDIGREE_*`
//! environment variables.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

/// Runtime configuration for `pedigree serve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

impl ServerConfig {
  /// Read `path` if it exists, then apply environment overrides such as
  /// `PEDIGREE_PORT=9000`.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("PEDIGREE"))
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}
