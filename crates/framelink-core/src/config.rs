use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::address::ContextScheme;

/// Default base for share links when config.toml does not override it.
pub const DEFAULT_SHARE_BASE: &str = "https://framelink.dev/embed";

/// Global configuration loaded from `~/.config/framelink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramelinkConfig {
    /// Scheme the embedding context is served over. Drives the sanitizer's
    /// http->https rewrite; "https" unless you really embed from plain http.
    #[serde(default)]
    pub context_scheme: ContextScheme,
    /// Base URL prefixed to the encoded parameters when building share links.
    #[serde(default = "default_share_base")]
    pub share_base_url: String,
}

fn default_share_base() -> String {
    DEFAULT_SHARE_BASE.to_string()
}

impl Default for FramelinkConfig {
    fn default() -> Self {
        Self {
            context_scheme: ContextScheme::Https,
            share_base_url: default_share_base(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("framelink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FramelinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FramelinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FramelinkConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FramelinkConfig::default();
        assert_eq!(cfg.context_scheme, ContextScheme::Https);
        assert_eq!(cfg.share_base_url, DEFAULT_SHARE_BASE);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FramelinkConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FramelinkConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.context_scheme, cfg.context_scheme);
        assert_eq!(parsed.share_base_url, cfg.share_base_url);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            context_scheme = "http"
            share_base_url = "http://localhost:5173/"
        "#;
        let cfg: FramelinkConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.context_scheme, ContextScheme::Http);
        assert_eq!(cfg.share_base_url, "http://localhost:5173/");
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: FramelinkConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.context_scheme, ContextScheme::Https);
        assert_eq!(cfg.share_base_url, DEFAULT_SHARE_BASE);
    }
}
