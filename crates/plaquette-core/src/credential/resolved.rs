//! Complete login information

use super::error::CredentialError;
use super::partial::PartialCredential;
use std::fmt;

/// A username/password pair where both pieces are definitely known
///
/// An empty password is a known password. `Debug` never shows the password.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    username: String,
    password: String,
}

impl ResolvedCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Masked password for display, one `*` per character
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }
}

impl TryFrom<PartialCredential> for ResolvedCredential {
    type Error = CredentialError;

    fn try_from(partial: PartialCredential) -> Result<Self, Self::Error> {
        match partial.into_parts() {
            (Some(username), Some(password)) => Ok(Self::new(username, password)),
            (Some(username), None) => Err(CredentialError::MissingPassword { username }),
            (None, Some(_)) => Err(CredentialError::MissingUsername),
            (None, None) => Err(CredentialError::NotFound),
        }
    }
}

impl fmt::Debug for ResolvedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
