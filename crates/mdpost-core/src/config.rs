use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/mdpost/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MdpostConfig {
    /// Maximum concurrent asset fetches within one document.
    pub max_concurrent_fetches: usize,
    /// Timeout in seconds for the HEAD probe used for extension inference.
    pub probe_timeout_secs: u64,
    /// Timeout in seconds for each asset GET.
    pub fetch_timeout_secs: u64,
    /// Default URL prefix applied to scheme-less image references when the
    /// caller does not pass one (e.g. "https://cdn.example.com/").
    #[serde(default)]
    pub url_prefix: Option<String>,
    /// Default blog root; when absent, output lands next to each document.
    #[serde(default)]
    pub output_root: Option<PathBuf>,
}

impl Default for MdpostConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 4,
            probe_timeout_secs: 5,
            fetch_timeout_secs: 10,
            url_prefix: None,
            output_root: None,
        }
    }
}

impl MdpostConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mdpost")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MdpostConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MdpostConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MdpostConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = MdpostConfig::default();
        assert_eq!(cfg.max_concurrent_fetches, 4);
        assert_eq!(cfg.probe_timeout_secs, 5);
        assert_eq!(cfg.fetch_timeout_secs, 10);
        assert!(cfg.url_prefix.is_none());
        assert!(cfg.output_root.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MdpostConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MdpostConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.max_concurrent_fetches, cfg.max_concurrent_fetches);
        assert_eq!(parsed.probe_timeout_secs, cfg.probe_timeout_secs);
        assert_eq!(parsed.fetch_timeout_secs, cfg.fetch_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            max_concurrent_fetches = 8
            probe_timeout_secs = 3
            fetch_timeout_secs = 30
            url_prefix = "https://cdn.example.com/"
            output_root = "/home/me/blog"
        "#;
        let cfg: MdpostConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.max_concurrent_fetches, 8);
        assert_eq!(cfg.probe_timeout_secs, 3);
        assert_eq!(cfg.fetch_timeout_secs, 30);
        assert_eq!(cfg.url_prefix.as_deref(), Some("https://cdn.example.com/"));
        assert_eq!(cfg.output_root.as_deref(), Some(std::path::Path::new("/home/me/blog")));
    }

    #[test]
    fn timeouts_as_durations() {
        let cfg = MdpostConfig::default();
        assert_eq!(cfg.probe_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.fetch_timeout(), Duration::from_secs(10));
    }
}
