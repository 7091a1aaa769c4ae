//! Credential source definitions
//!
//! Login information can be declared in three places. Each place is read
//! independently on every resolution and ranked by the fixed order below,
//! which only matters between sources supplying the same amount of information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A place from which login information can be read
///
/// Declaration order is priority order:
/// 1. Properties (`-D key=value` overrides, highest priority)
/// 2. Environment variables
/// 3. Credentials file (lowest priority)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    /// Process-level named parameters
    Property,
    /// Process environment variables
    Environment,
    /// Two-line credentials file
    File,
}

impl CredentialSource {
    /// Get all sources, highest priority first
    pub fn all() -> &'static [CredentialSource] {
        &[
            CredentialSource::Property,
            CredentialSource::Environment,
            CredentialSource::File,
        ]
    }

    /// Rank used to break ties between sources with equal information value.
    /// Higher wins.
    pub fn rank(&self) -> u8 {
        match self {
            CredentialSource::Property => 3,
            CredentialSource::Environment => 2,
            CredentialSource::File => 1,
        }
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CredentialSource::Property => "properties",
            CredentialSource::Environment => "environment variables",
            CredentialSource::File => "file",
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
