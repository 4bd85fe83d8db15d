//! HTTP-specific error types.
//!
//! - [`InvalidHttpRequestError`]: a request was rejected before it was sent
//! - [`HttpResponseError`]: a non-2xx response, produced on demand by
//!   [`HttpResponse::error_for_status`](crate::HttpResponse::error_for_status)
//! - [`HttpError`]: unified error type returned by every transport
//!
//! # Example
//!
//! Transports report any status code as a response. A non-2xx status only
//! becomes [`HttpError::Response`] once the caller opts in with
//! [`error_for_status`](crate::HttpResponse::error_for_status):
//!
//! ```rust,ignore
//! use simple_api_client::{ApiClient, HttpError, RequestOptions};
//!
//! async fn list_coupons(client: &mut ApiClient) -> Result<String, HttpError> {
//!     let response = client
//!         .segment("coupons")
//!         .fetch(RequestOptions::default())
//!         .await?
//!         .error_for_status()?;
//!     Ok(response.text().into_owned())
//! }
//!
//! match list_coupons(&mut client).await {
//!     Ok(body) => println!("{body}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error describing a non-successful HTTP response.
///
/// # Example
///
/// ```rust
/// use simple_api_client::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"Not found"}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), r#"HTTP 404: {"error":"Not found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, or the status reason when the body is empty.
    pub message: String,
}

/// Error returned when a request cannot be sent as built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The resolved URL could not be parsed.
    #[error("Invalid request URL '{url}'. Check that the host includes a scheme and a trailing '/'.")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
    },

    /// A header name contains characters not allowed in HTTP headers.
    #[error("Invalid header name '{name}'.")]
    InvalidHeaderName {
        /// The rejected header name.
        name: String,
    },

    /// A header value contains characters not allowed in HTTP headers.
    #[error("Invalid value for header '{name}'.")]
    InvalidHeaderValue {
        /// The name of the header whose value was rejected.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A non-2xx response, converted by the caller through
    /// [`HttpResponse::error_for_status`](crate::HttpResponse::error_for_status).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
