//! Partially known login information
//!
//! Each source yields one [`PartialCredential`]. A field is `None` when the
//! source has no opinion on it and `Some("")` when the source explicitly set
//! it to the empty string. The two must never be conflated.

/// Username and password as supplied by a single source, either possibly unknown
///
/// Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialCredential {
    username: Option<String>,
    password: Option<String>,
}

impl PartialCredential {
    /// Build from two optional pieces
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self { username, password }
    }

    /// Both pieces known
    pub fn given(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(Some(username.into()), Some(password.into()))
    }

    /// Only the username known
    pub fn only_username(username: impl Into<String>) -> Self {
        Self::new(Some(username.into()), None)
    }

    /// Only the password known
    pub fn only_password(password: impl Into<String>) -> Self {
        Self::new(None, Some(password.into()))
    }

    /// Nothing known
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Number of pieces this credential supplies, from 0 to 2
    pub fn information_value(&self) -> u8 {
        u8::from(self.username.is_some()) + u8::from(self.password.is_some())
    }

    pub(crate) fn into_parts(self) -> (Option<String>, Option<String>) {
        (self.username, self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_information_value() {
        assert_eq!(PartialCredential::empty().information_value(), 0);
        assert_eq!(PartialCredential::only_username("u").information_value(), 1);
        assert_eq!(PartialCredential::only_password("p").information_value(), 1);
        assert_eq!(PartialCredential::given("u", "p").information_value(), 2);
    }

    #[test]
    fn test_empty_string_is_information() {
        let cred = PartialCredential::given("", "");
        assert_eq!(cred.information_value(), 2);
        assert_eq!(cred.username(), Some(""));
        assert_eq!(cred.password(), Some(""));
        assert_ne!(cred, PartialCredential::empty());
    }

    #[test]
    fn test_constructors_agree_with_new() {
        assert_eq!(
            PartialCredential::only_username("alice"),
            PartialCredential::new(Some("alice".to_string()), None)
        );
        assert_eq!(
            PartialCredential::only_password("secret"),
            PartialCredential::new(None, Some("secret".to_string()))
        );
        assert_eq!(PartialCredential::empty(), PartialCredential::new(None, None));
    }
}
