//! HTTP request types.
//!
//! [`RequestOptions`] is what callers hand to a terminal action.
//! [`HttpRequest`] is the fully-resolved request a [`Transport`](crate::Transport)
//! receives.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::clients::debug_output::DebugOutput;

/// MIME type forced onto every request sent by [`ApiClient`](crate::ApiClient).
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP methods used by the terminal actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method token as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request body, sent verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// A text body, typically pre-serialized JSON.
    Text(String),
    /// A raw byte body.
    Bytes(Vec<u8>),
}

impl RequestBody {
    /// Returns the body as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }

    /// Consumes the body, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.into_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Text(value.to_string())
    }
}

/// Options accepted by every terminal action.
///
/// `RequestOptions::default()` is the empty options object: no extra
/// headers, no body, and the client's configured debug sink (if any).
///
/// # Example
///
/// ```rust
/// use simple_api_client::RequestOptions;
/// use serde_json::json;
///
/// let options = RequestOptions::default()
///     .header("X-Trace-Id", "abc")
///     .body(json!({"name": "Gagoit coupon", "code": "gagoit"}));
///
/// assert_eq!(options.headers.get("X-Trace-Id"), Some(&"abc".to_string()));
/// assert!(options.body.is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// Headers to send. `Content-Type` is always overwritten.
    pub headers: HashMap<String, String>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Sink for a request/response trace of this request.
    pub debug_output: Option<DebugOutput>,
}

impl RequestOptions {
    /// Adds a single header, replacing any header whose name differs only
    /// in case.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
        self
    }

    /// Sets all headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `value` as JSON and uses it as the request body.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if `value` cannot be represented as JSON.
    pub fn json_body<T: Serialize + ?Sized>(
        mut self,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        self.body = Some(RequestBody::Text(serde_json::to_string(value)?));
        Ok(self)
    }

    /// Attaches a debug sink to this request.
    #[must_use]
    pub fn debug_output(mut self, output: DebugOutput) -> Self {
        self.debug_output = Some(output);
        self
    }
}

/// A fully-resolved HTTP request ready for a transport.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL, exactly as resolved from host and path.
    pub url: String,
    /// Headers to send.
    pub headers: HashMap<String, String>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Sink for a request/response trace, if any.
    pub debug_output: Option<DebugOutput>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(http_method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            debug_output: None,
        }
    }

    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
