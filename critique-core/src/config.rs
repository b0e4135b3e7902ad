//! Configuration management for Critique
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (CRITIQUE_*)
//! 3. Config file (~/.config/critique/config.toml)
//! 4. Default values

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default provider endpoint, matching the backend's local dev address
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the feedback provider
    pub endpoint: String,

    /// Per-request timeout (humantime string in TOML, e.g. "30s")
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Provider configuration
    pub provider: ProviderConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/critique/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("critique").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - CRITIQUE_ENDPOINT: Provider base URL
    /// - CRITIQUE_TIMEOUT: Per-request timeout, humantime string such as "30s"
    ///
    /// An unparseable CRITIQUE_TIMEOUT is an error, not a silent fallback.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(endpoint) = std::env::var("CRITIQUE_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.provider.endpoint = endpoint.trim().to_string();
            }
        }

        if let Ok(timeout) = std::env::var("CRITIQUE_TIMEOUT") {
            if !timeout.trim().is_empty() {
                self.provider.timeout = parse_timeout(&timeout)?;
            }
        }

        Ok(self)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        endpoint: Option<String>,
        timeout: Option<Duration>,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            self.provider.endpoint = endpoint;
        }

        if let Some(timeout) = timeout {
            self.provider.timeout = timeout;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        endpoint: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()?
            .with_cli_overrides(endpoint, timeout))
    }
}

/// Parse a timeout value such as "30s" or "2m 30s"
fn parse_timeout(value: &str) -> Result<Duration> {
    humantime::parse_duration(value.trim())
        .map_err(|e| Error::Config(format!("Invalid timeout '{}': {}", value.trim(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.provider.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(
            Some("https://review.example.com".to_string()),
            Some(Duration::from_secs(5)),
        );

        assert_eq!(config.provider.endpoint, "https://review.example.com");
        assert_eq!(config.provider.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_parse_timeout_humantime() {
        assert_eq!(parse_timeout("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout(" 2m 30s ").unwrap(), Duration::from_secs(150));
    }

    #[test]
    fn test_parse_timeout_rejects_garbage() {
        let err = parse_timeout("thirty").unwrap_err();
        assert!(err.to_string().contains("Invalid timeout 'thirty'"));
    }

    #[test]
    fn test_env_overrides_beat_file_and_lose_to_cli() {
        // The only test that touches CRITIQUE_* variables, to avoid races
        let file_config: Config = toml::from_str(
            r#"
[provider]
endpoint = "http://from-file:8000"
timeout = "10s"
"#,
        )
        .unwrap();

        std::env::set_var("CRITIQUE_ENDPOINT", "http://from-env:8001");
        std::env::set_var("CRITIQUE_TIMEOUT", "20s");

        let with_env = file_config.with_env_overrides().unwrap();
        assert_eq!(with_env.provider.endpoint, "http://from-env:8001");
        assert_eq!(with_env.provider.timeout, Duration::from_secs(20));

        let with_cli = with_env.with_cli_overrides(
            Some("http://from-cli:8002".to_string()),
            Some(Duration::from_secs(30)),
        );
        assert_eq!(with_cli.provider.endpoint, "http://from-cli:8002");
        assert_eq!(with_cli.provider.timeout, Duration::from_secs(30));

        std::env::remove_var("CRITIQUE_ENDPOINT");
        std::env::remove_var("CRITIQUE_TIMEOUT");
    }

    #[test]
    fn test_cli_overrides_none_keeps_defaults() {
        let config = Config::default().with_cli_overrides(None, None);
        assert_eq!(config.provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.provider.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[provider]
endpoint = "https://review.internal:9000"
timeout = "90s"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.provider.endpoint, "https://review.internal:9000");
        assert_eq!(config.provider.timeout, Duration::from_secs(90));
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[provider]
endpoint = "http://localhost:8080"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // timeout should use default
        assert_eq!(config.provider.endpoint, "http://localhost:8080");
        assert_eq!(config.provider.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.provider.endpoint, config.provider.endpoint);
        assert_eq!(parsed.provider.timeout, config.provider.timeout);
    }
}
