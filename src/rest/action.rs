//! Terminal actions and the verbs they map to.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::clients::HttpMethod;

/// An action that ends a path chain and sends the request.
///
/// | Action   | Verb     |
/// |----------|----------|
/// | `create` | `POST`   |
/// | `update` | `PUT`    |
/// | `upsert` | `PATCH`  |
/// | `delete` | `DELETE` |
/// | `fetch`  | `GET`    |
///
/// # Example
///
/// ```rust
/// use simple_api_client::{Action, HttpMethod};
///
/// let action: Action = "upsert".parse().unwrap();
/// assert_eq!(action.http_method(), HttpMethod::Patch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Create a resource (POST).
    Create,
    /// Replace a resource (PUT).
    Update,
    /// Partially update a resource (PATCH).
    Upsert,
    /// Delete a resource (DELETE).
    Delete,
    /// Fetch a resource or collection (GET).
    Fetch,
}

impl Action {
    /// Every action, in table order.
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Update,
        Self::Upsert,
        Self::Delete,
        Self::Fetch,
    ];

    /// Returns the HTTP method this action is sent with.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        match self {
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Upsert => HttpMethod::Patch,
            Self::Delete => HttpMethod::Delete,
            Self::Fetch => HttpMethod::Get,
        }
    }

    /// Returns the action name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Upsert => "upsert",
            Self::Delete => "delete",
            Self::Fetch => "fetch",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown action '{name}'. Expected one of: create, update, upsert, delete, fetch.")]
pub struct ParseActionError {
    /// The name that did not match any action.
    pub name: String,
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseActionError {
                name: s.to_string(),
            })
    }
}
