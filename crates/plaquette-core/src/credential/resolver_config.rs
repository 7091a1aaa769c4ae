//! Resolver configuration
//!
//! Everything the resolver reads from the outside world is held here, so
//! callers (and tests) can substitute any input without touching process state.

use super::credentials_file::DEFAULT_CREDENTIALS_FILE;
use super::property_store::PropertyStore;
use std::collections::HashMap;
use std::path::PathBuf;

/// Default property and environment variable holding the username
pub const DEFAULT_USERNAME_KEY: &str = "API_username";

/// Default property and environment variable holding the password
pub const DEFAULT_PASSWORD_KEY: &str = "API_password";

/// Configuration for the credential resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Key of the username, in properties and environment
    pub username_key: String,
    /// Key of the password, in properties and environment
    pub password_key: String,
    /// Path of the credentials file
    pub credentials_file: PathBuf,
    /// Process properties (highest priority)
    pub properties: PropertyStore,
    /// Environment variables
    pub env: HashMap<String, String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_USERNAME_KEY,
            DEFAULT_PASSWORD_KEY,
            DEFAULT_CREDENTIALS_FILE,
        )
    }
}

impl ResolverConfig {
    /// Create a config with custom key names and file, no properties, and a
    /// snapshot of the current process environment
    pub fn new(
        username_key: impl Into<String>,
        password_key: impl Into<String>,
        credentials_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            username_key: username_key.into(),
            password_key: password_key.into(),
            credentials_file: credentials_file.into(),
            properties: PropertyStore::new(),
            env: process_env(),
        }
    }

    /// Set the credentials file
    pub fn with_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = path.into();
        self
    }

    /// Replace the property store
    pub fn with_properties(mut self, properties: PropertyStore) -> Self {
        self.properties = properties;
        self
    }

    /// Set a single property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.set(key, value);
        self
    }

    /// Replace the environment mapping
    pub fn with_env<K, V>(mut self, env: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env = env
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Set the username key
    pub fn with_username_key(mut self, key: impl Into<String>) -> Self {
        self.username_key = key.into();
        self
    }

    /// Set the password key
    pub fn with_password_key(mut self, key: impl Into<String>) -> Self {
        self.password_key = key.into();
        self
    }
}

/// Snapshot of the process environment; non-UTF-8 entries are skipped
fn process_env() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.username_key, "API_username");
        assert_eq!(config.password_key, "API_password");
        assert_eq!(config.credentials_file, PathBuf::from("API_login.txt"));
        assert!(config.properties.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = ResolverConfig::new("user", "pass", "login.txt")
            .with_property("user", "prop")
            .with_env([("user", "env"), ("pass", "env pass")])
            .with_credentials_file("other.txt");

        assert_eq!(config.username_key, "user");
        assert_eq!(config.password_key, "pass");
        assert_eq!(config.credentials_file, PathBuf::from("other.txt"));
        assert_eq!(config.properties.get("user"), Some("prop"));
        assert_eq!(config.env.len(), 2);
        assert_eq!(config.env.get("pass").map(String::as_str), Some("env pass"));
    }

    #[test]
    fn test_with_env_replaces_snapshot() {
        let config = ResolverConfig::default().with_env(Vec::<(String, String)>::new());
        assert!(config.env.is_empty());
    }
}
