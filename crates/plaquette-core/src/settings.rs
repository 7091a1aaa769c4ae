//! On-disk settings
//!
//! Optional TOML file overriding the key names and the credentials file:
//!
//! ```toml
//! [credentials]
//! username_key = "WSDL_username"
//! password_key = "WSDL_password"
//! file = "WSDL_login.txt"
//! ```

use crate::credential::{
    DEFAULT_CREDENTIALS_FILE, DEFAULT_PASSWORD_KEY, DEFAULT_USERNAME_KEY, ResolverConfig,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default settings file name
pub const DEFAULT_SETTINGS_FILE: &str = "plaquette.toml";

/// Failure to load the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub credentials: CredentialSettings,
}

/// Where the resolver looks for login information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialSettings {
    pub username_key: String,
    pub password_key: String,
    pub file: PathBuf,
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            username_key: DEFAULT_USERNAME_KEY.to_string(),
            password_key: DEFAULT_PASSWORD_KEY.to_string(),
            file: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
        }
    }
}

impl Settings {
    /// Load settings from a file
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            debug!("Settings file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolver configuration using these settings and the live environment
    pub fn into_resolver_config(self) -> ResolverConfig {
        let creds = self.credentials;
        ResolverConfig::new(creds.username_key, creds.password_key, creds.file)
    }
}
