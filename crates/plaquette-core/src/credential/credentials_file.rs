//! Two-line credentials file
//!
//! ```text
//! <username>
//! <password>
//! [<empty line>]*
//! ```
//!
//! A missing line reads as the empty string. Only zero-length lines may follow
//! the password; a line holding just spaces is content. Lines end at `\n`,
//! `\r\n` or a bare `\r`.

use super::error::ReadError;
use super::partial::PartialCredential;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Default name of the credentials file, relative to the working directory
pub const DEFAULT_CREDENTIALS_FILE: &str = "API_login.txt";

/// Login information read from an existing credentials file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsFile {
    pub username: String,
    pub password: String,
}

impl CredentialsFile {
    /// Load a credentials file
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, ReadError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Credentials file {} does not exist", path.display());
                return Ok(None);
            }
            Err(e) => return Err(ReadError::io(path, e)),
        };
        Self::parse(path, &content).map(Some)
    }

    /// Parse the content of a credentials file; `path` is only used for errors
    pub fn parse(path: &Path, content: &str) -> Result<Self, ReadError> {
        let lines = split_lines(content);

        if lines.iter().skip(2).any(|line| !line.is_empty()) {
            return Err(ReadError::file_format(path, lines.len()));
        }

        let mut iter = lines.iter();
        let username = iter.next().copied().unwrap_or_default().to_string();
        let password = iter.next().copied().unwrap_or_default().to_string();

        Ok(Self { username, password })
    }

    pub fn into_partial(self) -> PartialCredential {
        PartialCredential::given(self.username, self.password)
    }
}

/// Split on `\n`, `\r\n` and `\r`; a final terminator adds no empty line
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}
