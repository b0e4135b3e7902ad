//! API key storage
//!
//! The provider API key lives outside config.toml so the configuration file
//! can be shared without leaking credentials. Resolution order:
//! 1. CRITIQUE_API_KEY environment variable
//! 2. ~/.config/critique/secrets.toml
//!
//! On Unix the secrets file is refused unless it is private to its owner
//! (chmod 600). Empty and whitespace-only keys count as unset.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result};

const TEMPLATE: &str = r#"# Critique secrets
# Do not share this file or commit it to version control.
# It must stay private to its owner: chmod 600

[provider]
# API key for the feedback provider, sent as a bearer token.
# Leave empty if your provider does not require authentication.
api_key = ""
"#;

/// Contents of the secrets file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Secrets {
    /// Provider credentials
    pub provider: ProviderSecrets,
}

/// Credentials for the feedback provider
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderSecrets {
    /// API key, sent as a bearer token
    pub api_key: Option<String>,
}

impl Secrets {
    /// Default secrets location: `~/.config/critique/secrets.toml`
    pub fn default_secrets_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("critique").join("secrets.toml"))
    }

    /// Load secrets, or empty defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::default_secrets_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate a specific secrets file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        reject_shared_file(path)?;

        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let mut secrets: Secrets = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse secrets: {}", e)))?;

        // Normalize: trim, and drop keys that trim to nothing
        if let Some(key) = secrets.provider.api_key.take() {
            let key = key.trim();
            if !key.is_empty() {
                secrets.provider.api_key = Some(key.to_string());
            }
        }

        Ok(secrets)
    }

    /// Resolve the API key, environment variable first
    pub fn api_key(&self) -> Option<String> {
        let from_env = std::env::var("CRITIQUE_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if from_env.is_some() {
            debug!("Using API key from CRITIQUE_API_KEY environment variable");
            return from_env;
        }

        let from_file = self.provider.api_key.clone().filter(|k| !k.is_empty());
        if from_file.is_some() {
            debug!("Using API key from secrets file");
        }

        from_file
    }

    /// Write a commented starter secrets file at the default location
    pub fn create_template() -> Result<PathBuf> {
        let path = Self::default_secrets_path()
            .ok_or_else(|| Error::Config("Could not determine secrets path".to_string()))?;

        Self::create_template_at(&path)?;

        warn!(path = %path.display(), "Created secrets template - edit it to add your API key");
        Ok(path)
    }

    /// Write the starter file at a specific path, refusing to overwrite
    ///
    /// Creates parent directories as needed; the file ends up owner-only
    /// (0600) on Unix so a later load accepts it.
    pub fn create_template_at(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(Error::Config(format!(
                "Secrets file already exists at {}",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::Io)?;
        }

        std::fs::write(path, TEMPLATE).map_err(Error::Io)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
                .map_err(Error::Io)?;
        }

        Ok(())
    }
}

/// Refuse secrets files readable by group or others
#[cfg(unix)]
fn reject_shared_file(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path)
        .map_err(Error::Io)?
        .permissions()
        .mode();

    if mode & 0o077 != 0 {
        return Err(Error::Config(format!(
            "Secrets file {} is readable by other users (mode {:o}). \
             Run: chmod 600 {}",
            path.display(),
            mode & 0o777,
            path.display()
        )));
    }

    debug!(path = %path.display(), "Secrets file permissions OK");
    Ok(())
}

#[cfg(not(unix))]
fn reject_shared_file(_path: &Path) -> Result<()> {
    Ok(())
}
