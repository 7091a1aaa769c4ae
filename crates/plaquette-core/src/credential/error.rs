//! Error types for credential resolution

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading the credential sources
#[derive(Error, Debug)]
pub enum ReadError {
    /// The credentials file has non-empty content after its second line
    #[error("File {} is too long: {} lines", path.display(), lines)]
    FileFormat { path: PathBuf, lines: usize },

    /// The credentials file exists but could not be read
    #[error("Failed to read credentials file {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReadError {
    /// Create a new file format error
    pub fn file_format(path: impl Into<PathBuf>, lines: usize) -> Self {
        Self::FileFormat {
            path: path.into(),
            lines,
        }
    }

    /// Create a new I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure to produce a complete username/password pair
///
/// Messages may include the username, never the password.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Login information not found.")]
    NotFound,

    #[error("Found password but no username.")]
    MissingUsername,

    #[error("Found username '{username}' but no password.")]
    MissingPassword { username: String },

    #[error(transparent)]
    Read(#[from] ReadError),
}

impl CredentialError {
    /// Check if this error comes from a missing piece of information rather
    /// than from an unreadable source
    pub fn is_incomplete(&self) -> bool {
        !matches!(self, CredentialError::Read(_))
    }
}

/// Result type alias for credential finalization
pub type CredentialResult<T> = Result<T, CredentialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_format_message() {
        let err = ReadError::file_format("API_login.txt", 5);
        assert_eq!(err.to_string(), "File API_login.txt is too long: 5 lines");
    }

    #[test]
    fn test_credential_messages() {
        assert_eq!(
            CredentialError::NotFound.to_string(),
            "Login information not found."
        );
        assert_eq!(
            CredentialError::MissingUsername.to_string(),
            "Found password but no username."
        );
        assert_eq!(
            CredentialError::MissingPassword {
                username: "alice".to_string()
            }
            .to_string(),
            "Found username 'alice' but no password."
        );
    }

    #[test]
    fn test_read_error_is_transparent() {
        let err = CredentialError::from(ReadError::file_format("creds.txt", 3));
        assert_eq!(err.to_string(), "File creds.txt is too long: 3 lines");
        assert!(!err.is_incomplete());
        assert!(CredentialError::NotFound.is_incomplete());
    }
}
