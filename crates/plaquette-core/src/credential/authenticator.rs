//! Constant HTTP authentication
//!
//! Hands a [`ResolvedCredential`] to the HTTP layer. Every request made through
//! an authenticated client carries the same Basic credentials for as long as
//! the client lives.

use super::resolved::ResolvedCredential;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};

/// Answers every authentication challenge with the same username and password
#[derive(Debug, Clone)]
pub struct ConstantAuthenticator {
    credential: ResolvedCredential,
}

impl ConstantAuthenticator {
    pub fn new(credential: ResolvedCredential) -> Self {
        Self { credential }
    }

    pub fn credential(&self) -> &ResolvedCredential {
        &self.credential
    }

    /// Add Basic authentication to a single request
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.basic_auth(self.credential.username(), Some(self.credential.password()))
    }

    /// `Authorization` header value, marked sensitive
    pub fn header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let token = STANDARD.encode(format!(
            "{}:{}",
            self.credential.username(),
            self.credential.password()
        ));
        let mut value = HeaderValue::from_str(&format!("Basic {}", token))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Client builder whose requests all carry the credentials
    pub fn client_builder(&self) -> Result<reqwest::ClientBuilder, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.header_value()?);
        Ok(reqwest::Client::builder().default_headers(headers))
    }
}

impl From<ResolvedCredential> for ConstantAuthenticator {
    fn from(credential: ResolvedCredential) -> Self {
        Self::new(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorization(request: &reqwest::Request) -> Option<&str> {
        request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_header_value() {
        let auth = ConstantAuthenticator::new(ResolvedCredential::new("alice", "secret"));
        let value = auth.header_value().unwrap();
        assert_eq!(value.to_str().unwrap(), "Basic YWxpY2U6c2VjcmV0");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_empty_password_is_sent() {
        let auth = ConstantAuthenticator::from(ResolvedCredential::new("alice", ""));
        assert_eq!(auth.header_value().unwrap().to_str().unwrap(), "Basic YWxpY2U6");
    }

    #[test]
    fn test_apply_to_request() {
        let auth = ConstantAuthenticator::new(ResolvedCredential::new("alice", "secret"));
        let client = reqwest::Client::new();
        let request = auth
            .apply(client.get("http://localhost/ws"))
            .build()
            .unwrap();
        assert_eq!(authorization(&request), Some("Basic YWxpY2U6c2VjcmV0"));
    }

    #[test]
    fn test_client_builder() {
        let auth = ConstantAuthenticator::new(ResolvedCredential::new("alice", "secret"));
        assert!(auth.client_builder().unwrap().build().is_ok());
        assert_eq!(auth.credential().username(), "alice");
    }
}
