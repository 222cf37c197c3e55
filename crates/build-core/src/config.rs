//! Configuration management for the build proxy

use crate::constants::{
    API_KEY_ENV_VAR, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_UPSTREAM_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL,
};
use crate::error::{BuildError, Result};
use crate::types::Credential;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub nutrient: NutrientConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct NutrientConfig {
    #[serde(alias = "api_url", default = "default_upstream_url")]
    pub base_url: String,

    /// Bearer credential; `None` leaves the service unconfigured
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

// Keeps the credential out of logs
impl fmt::Debug for NutrientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutrientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for NutrientConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl NutrientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured credential, ignoring blank values
    pub fn credential(&self) -> Option<Credential> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(Credential::new)
    }
}

// Default functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_upstream_url() -> String {
    DEFAULT_UPSTREAM_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_UPSTREAM_TIMEOUT_SECS
}

impl ProxyConfig {
    /// Load configuration from a JSON file, then apply environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, |key| std::env::var(key).ok())
    }

    /// Load a JSON file, taking overrides from `lookup` instead of the process environment
    pub fn from_file_with<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            BuildError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let mut config = Self::parse_json(&content)?;
        config.apply_env_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config = Self::parse_json(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus whatever the process environment overrides
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn parse_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| BuildError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV_VAR) {
            self.nutrient.api_key = Some(key);
        }
        if let Some(url) = lookup("NUTRIENT_API_URL") {
            self.nutrient.base_url = url;
        }
        if let Some(secs) = lookup("NUTRIENT_TIMEOUT_SECS") {
            self.nutrient.timeout_secs = parse_var("NUTRIENT_TIMEOUT_SECS", &secs)?;
        }
        if let Some(host) = lookup("BUILD_PROXY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("BUILD_PROXY_PORT") {
            self.server.port = parse_var("BUILD_PROXY_PORT", &port)?;
        }
        if let Some(limit) = lookup("BUILD_PROXY_MAX_UPLOAD_BYTES") {
            self.server.max_upload_bytes = parse_var("BUILD_PROXY_MAX_UPLOAD_BYTES", &limit)?;
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// A missing credential is not an error here; requests report it as a
    /// server misconfiguration instead.
    pub fn validate(&self) -> Result<()> {
        if self.nutrient.base_url.trim().is_empty() {
            return Err(BuildError::Config("Nutrient API URL is required".to_string()));
        }

        if self.nutrient.timeout_secs == 0 {
            return Err(BuildError::Config(
                "Nutrient timeout must be at least one second".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(BuildError::Config("Server port must be non-zero".to_string()));
        }

        if self.server.max_upload_bytes == 0 {
            return Err(BuildError::Config(
                "Maximum upload size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| BuildError::Config(format!("Invalid value for {}: {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = NutrientConfig {
            api_key: Some("pdf_live_secret".to_string()),
            ..NutrientConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("pdf_live_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_blank_api_key_is_no_credential() {
        let config = NutrientConfig {
            api_key: Some("   ".to_string()),
            ..NutrientConfig::default()
        };
        assert!(config.credential().is_none());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("NUTRIENT_API_KEY", "env_key"),
            ("NUTRIENT_TIMEOUT_SECS", "15"),
            ("BUILD_PROXY_PORT", "8080"),
        ]
        .into_iter()
        .collect();

        let mut config = ProxyConfig::default();
        config
            .apply_env_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.nutrient.api_key.as_deref(), Some("env_key"));
        assert_eq!(config.nutrient.timeout(), Duration::from_secs(15));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.nutrient.base_url, DEFAULT_UPSTREAM_URL);
    }

    #[test]
    fn test_invalid_env_number_is_config_error() {
        let mut config = ProxyConfig::default();
        let result = config.apply_env_overrides(|k| {
            (k == "BUILD_PROXY_PORT").then(|| "not-a-port".to_string())
        });
        assert!(matches!(result, Err(BuildError::Config(_))));
    }
}
