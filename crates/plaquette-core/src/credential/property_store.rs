//! Process-level named parameters
//!
//! The property store is a key/value table owned by the process and distinct
//! from the environment. The command line fills it from `-D key=value` flags.

use std::collections::HashMap;
use thiserror::Error;

/// A `-D` definition that is not of the form `key=value`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid property definition '{0}': expected key=value")]
pub struct PropertyParseError(pub String);

/// Key/value table of process properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    values: HashMap<String, String>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, including to the empty string
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a property; `None` means not set
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a single `key=value` definition
    ///
    /// Splits on the first `=`, so values may contain `=`. `key=` sets the
    /// key to the empty string.
    pub fn parse_definition(definition: &str) -> Result<(String, String), PropertyParseError> {
        match definition.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(PropertyParseError(definition.to_string())),
        }
    }

    /// Build a store from `key=value` definitions; later definitions win
    pub fn from_definitions<I, S>(definitions: I) -> Result<Self, PropertyParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for definition in definitions {
            let (key, value) = Self::parse_definition(definition.as_ref())?;
            store.set(key, value);
        }
        Ok(store)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyStore {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_store_default() {
        let store = PropertyStore::default();
        assert!(store.is_empty());
        assert_eq!(store.get("API_username"), None);
    }

    #[test]
    fn test_property_store_builder() {
        let store = PropertyStore::new()
            .with("API_username", "prop username")
            .with("API_password", "");

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("API_username"), Some("prop username"));
        assert_eq!(store.get("API_password"), Some(""));
    }

    #[test]
    fn test_parse_definition() {
        assert_eq!(
            PropertyStore::parse_definition("API_username=alice").unwrap(),
            ("API_username".to_string(), "alice".to_string())
        );
        assert_eq!(
            PropertyStore::parse_definition("API_password=a=b").unwrap(),
            ("API_password".to_string(), "a=b".to_string())
        );
        assert_eq!(
            PropertyStore::parse_definition("API_password=").unwrap(),
            ("API_password".to_string(), String::new())
        );
        assert!(PropertyStore::parse_definition("API_username").is_err());
        assert!(PropertyStore::parse_definition("=value").is_err());
    }

    #[test]
    fn test_from_definitions_last_wins() {
        let store =
            PropertyStore::from_definitions(["API_username=first", "API_username=second"]).unwrap();
        assert_eq!(store.get("API_username"), Some("second"));

        let err = PropertyStore::from_definitions(["ok=1", "broken"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid property definition 'broken': expected key=value"
        );
    }
}
