use crate::transport::DEFAULT_TIMEOUT;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub providers: Providers,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Providers {
    pub geonode: ProviderConfig,
    pub free_proxy_list: ProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-source cap on returned records, 0 for no cap.
    pub max_proxies: usize,
    pub timeout_secs: u64,
    /// `host:port` of a proxy to route source requests through.
    pub upstream_proxy: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_proxies: 50,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            upstream_proxy: None,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn upstream_proxy(&self) -> Option<&str> {
        self.upstream_proxy.as_deref().filter(|p| !p.is_empty())
    }
}

impl Settings {
    /// Reads `config.toml` from the working directory.
    pub fn new() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// A missing file yields the defaults; an unreadable or malformed one is
    /// an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(e).with_context(|| format!("cannot read {}", path.display())),
        };

        Self::from_toml(&config_data).with_context(|| format!("cannot parse {}", path.display()))
    }

    pub fn from_toml(config_data: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(config_data)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let settings = Settings::default();
        assert!(settings.providers.geonode.enabled);
        assert!(settings.providers.free_proxy_list.enabled);
        assert_eq!(settings.fetch.max_proxies, 50);
        assert_eq!(settings.fetch.timeout(), Duration::from_secs(10));
        assert_eq!(settings.fetch.upstream_proxy(), None);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert!(settings.providers.geonode.enabled);
        assert_eq!(settings.fetch.max_proxies, 50);
    }

    #[test]
    fn test_partial_document() {
        let settings = Settings::from_toml(
            r#"
            [providers.free_proxy_list]
            enabled = false

            [fetch]
            max_proxies = 0
            upstream_proxy = "10.0.0.1:3128"
            "#,
        )
        .unwrap();

        assert!(settings.providers.geonode.enabled);
        assert!(!settings.providers.free_proxy_list.enabled);
        assert_eq!(settings.fetch.max_proxies, 0);
        assert_eq!(settings.fetch.timeout_secs, 10);
        assert_eq!(settings.fetch.upstream_proxy(), Some("10.0.0.1:3128"));
    }

    #[test]
    fn test_empty_upstream_proxy_is_none() {
        let settings = Settings::from_toml("[fetch]\nupstream_proxy = \"\"").unwrap();
        assert_eq!(settings.fetch.upstream_proxy(), None);
    }

    #[test]
    fn test_malformed_document_is_error() {
        assert!(Settings::from_toml("[fetch\nmax_proxies = ").is_err());
        assert!(Settings::from_toml("[fetch]\nmax_proxies = \"many\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load("does/not/exist/config.toml").unwrap();
        assert!(settings.providers.free_proxy_list.enabled);
    }
}
