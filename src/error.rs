//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! bad configuration fails at construction rather than on the first request.
//!
//! # Example
//!
//! ```rust
//! use simple_api_client::{ConfigError, Host};
//!
//! let result = Host::new("   ");
//! assert!(matches!(result, Err(ConfigError::EmptyHost)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host cannot be empty.
    #[error("Host cannot be empty. Please provide a base URL such as 'https://api.example.com/'.")]
    EmptyHost,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
