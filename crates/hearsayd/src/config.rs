//! Configuration management for hearsayd.
//!
//! Loads settings from /etc/hearsay/config.toml or uses defaults. The
//! upstream messages URL can also be overridden with the
//! HEARSAY_MESSAGES_URL environment variable, which wins over the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/hearsay/config.toml";

/// Environment override for the upstream messages URL
pub const MESSAGES_URL_ENV: &str = "HEARSAY_MESSAGES_URL";

/// Upstream message source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// URL of the message collection endpoint
    #[serde(default = "default_messages_url")]
    pub messages_url: String,

    /// Fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_messages_url() -> String {
    "http://127.0.0.1:8900/messages".to_string()
}

fn default_fetch_timeout() -> u64 {
    10
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            messages_url: default_messages_url(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address; localhost only by default
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:7410".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

/// Top-level daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HearsaydConfig {
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl HearsaydConfig {
    /// Load configuration, falling back to defaults on any problem.
    pub fn load() -> Self {
        let mut config = Self::load_from(Path::new(CONFIG_PATH));

        if let Ok(url) = std::env::var(MESSAGES_URL_ENV) {
            if !url.is_empty() {
                info!("Using {} override for messages URL", MESSAGES_URL_ENV);
                config.upstream.messages_url = url;
            }
        }

        config
    }

    /// Load from a specific path; missing or invalid files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = HearsaydConfig::default();
        assert_eq!(config.upstream.fetch_timeout_secs, 10);
        assert_eq!(config.server.listen_addr, "127.0.0.1:7410");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = HearsaydConfig::load_from(Path::new("/nonexistent/hearsay.toml"));
        assert_eq!(config.upstream.messages_url, default_messages_url());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[upstream]\nmessages_url = \"http://example.test/messages\"").unwrap();

        let config = HearsaydConfig::load_from(file.path());
        assert_eq!(config.upstream.messages_url, "http://example.test/messages");
        assert_eq!(config.upstream.fetch_timeout_secs, 10);
        assert_eq!(config.server.listen_addr, "127.0.0.1:7410");
    }

    #[test]
    fn test_invalid_file_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let config = HearsaydConfig::load_from(file.path());
        assert_eq!(config.server.listen_addr, default_listen_addr());
    }
}
