//! Configuration types for the API client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: everything an [`ApiClient`](crate::ApiClient) needs at construction
//! - [`ClientConfigBuilder`]: a builder for [`ClientConfig`]
//! - [`Host`]: the base URL paths are appended to
//! - [`Password`]: a password with masked debug output
//!
//! # Example
//!
//! ```rust
//! use simple_api_client::{ClientConfig, Host, Password};
//!
//! let config = ClientConfig::builder()
//!     .host(Host::new("https://api.example.com/").unwrap())
//!     .username("gagoit")
//!     .password(Password::new("secret"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://api.example.com/");
//! ```

mod newtypes;

pub use newtypes::{Host, Password};

use crate::clients::DebugOutput;
use crate::error::ConfigError;

/// Configuration for an [`ApiClient`](crate::ApiClient).
///
/// The username and password are carried for callers that need them but
/// are not attached to outgoing requests; no authentication scheme is
/// applied by the client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    host: Host,
    username: Option<String>,
    password: Option<Password>,
    user_agent_prefix: Option<String>,
    debug_output: Option<DebugOutput>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the username, if configured.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the password, if configured.
    #[must_use]
    pub const fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the default debug sink for requests, if configured.
    #[must_use]
    pub const fn debug_output(&self) -> Option<&DebugOutput> {
        self.debug_output.as_ref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// `host` is required. Everything else defaults to `None`.
///
/// # Example
///
/// ```rust
/// use simple_api_client::{ClientConfig, DebugOutput, Host};
///
/// let config = ClientConfig::builder()
///     .host(Host::new("https://api.example.com/").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .debug_output(DebugOutput::stderr())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    host: Option<Host>,
    username: Option<String>,
    password: Option<Password>,
    user_agent_prefix: Option<String>,
    debug_output: Option<DebugOutput>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the host (required).
    #[must_use]
    pub fn host(mut self, host: Host) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the debug sink used when a request's options carry none.
    #[must_use]
    pub fn debug_output(mut self, output: DebugOutput) -> Self {
        self.debug_output = Some(output);
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` is not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;

        Ok(ClientConfig {
            host,
            username: self.username,
            password: self.password,
            user_agent_prefix: self.user_agent_prefix,
            debug_output: self.debug_output,
        })
    }
}
