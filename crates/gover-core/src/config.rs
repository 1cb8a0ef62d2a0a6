//! Global configuration loaded from `~/.config/gover/config.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoverConfig {
    /// Release index endpoint (JSON, newest release first).
    pub index_url: String,
    /// Base URL the artifact filename is joined onto.
    pub download_prefix_url: String,
    /// Skip the download when the destination already holds a file with the
    /// expected size and checksum. `--force` overrides this per invocation.
    pub skip_verified: bool,
}

impl Default for GoverConfig {
    fn default() -> Self {
        Self {
            index_url: "https://golang.org/dl/?mode=json".to_string(),
            download_prefix_url: "https://golang.org/dl/".to_string(),
            skip_verified: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gover")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GoverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GoverConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GoverConfig = toml::from_str(&data)?;
    Ok(cfg)
}
