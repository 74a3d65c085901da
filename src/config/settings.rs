//! Application settings
//!
//! Runtime configuration for probe timeouts, subdomain labels, scan paths
//! and the preload list location. Values come from built-in defaults,
//! optionally overridden by a TOML file.

use crate::error::{HstsToolkitError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Chromium publishes the preload list as base64-encoded JSON at this URL.
pub const DEFAULT_PRELOAD_LIST_URL: &str = "https://chromium.googlesource.com/chromium/src/+/main/net/http/transport_security_state_static.json?format=TEXT";

fn default_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("hsts-toolkit/{}", env!("CARGO_PKG_VERSION"))
}

fn default_subdomain_labels() -> Vec<String> {
    ["www", "api", "m", "dev", "static", "cdn"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_audit_paths() -> Vec<String> {
    ["/", "/login", "/api", "/admin"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_preload_list_url() -> String {
    DEFAULT_PRELOAD_LIST_URL.to_string()
}

/// HTTP client settings shared by all probes
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Probe target settings
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeSettings {
    #[serde(default = "default_subdomain_labels")]
    pub subdomain_labels: Vec<String>,
    #[serde(default = "default_audit_paths")]
    pub audit_paths: Vec<String>,
    #[serde(default = "default_preload_list_url")]
    pub preload_list_url: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            subdomain_labels: default_subdomain_labels(),
            audit_paths: default_audit_paths(),
            preload_list_url: default_preload_list_url(),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub probes: ProbeSettings,
}

impl Settings {
    /// Load settings from the default config file, falling back to defaults
    pub fn load_default() -> Result<Self> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| {
            HstsToolkitError::Config(format!("configuration file not found: {}", path.display()))
        })?;

        toml::from_str(&content).map_err(|e| HstsToolkitError::Config(e.to_string()))
    }

    /// Override the probe timeout from the command line
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.http.timeout_secs = timeout_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.http.timeout_secs, 5);
        assert_eq!(settings.probes.subdomain_labels.len(), 6);
        assert_eq!(settings.probes.audit_paths[0], "/");
    }

    #[test]
    fn test_partial_toml_override() {
        let settings: Settings = toml::from_str("[http]\ntimeout_secs = 2\n").unwrap();
        assert_eq!(settings.http.timeout_secs, 2);
        assert_eq!(settings.probes.audit_paths.len(), 4);
    }
}
