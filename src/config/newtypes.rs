//! Newtype wrappers for configuration values.
//!
//! [`Host`] is stored exactly as given, so it must already end in whatever
//! form concatenates cleanly with a resource path (usually a trailing `/`).

use crate::error::ConfigError;
use std::fmt;

/// The base URL every request path is appended to.
///
/// The only validation is that the host is not blank. No scheme check,
/// normalization, or trailing-slash fixup is performed; a malformed host
/// surfaces as an error when a request is dispatched.
///
/// # Example
///
/// ```rust
/// use simple_api_client::Host;
///
/// let host = Host::new("https://api.example.com/").unwrap();
/// assert_eq!(host.as_ref(), "https://api.example.com/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host(String);

impl Host {
    /// Creates a new host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyHost`] if the host is empty or whitespace.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        Ok(Self(host))
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A password stored alongside the client configuration.
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`, so configs can be logged safely.
///
/// ```rust
/// use simple_api_client::Password;
///
/// let password = Password::new("hunter2");
/// assert_eq!(format!("{password:?}"), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a password value.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}
