//! HTTP transport types.
//!
//! This module provides the layer [`ApiClient`](crate::ApiClient) delegates
//! network calls to.
//!
//! # Overview
//!
//! - [`Transport`]: the capability "send this request, return a response or fail"
//! - [`HttpClient`]: the default `reqwest` transport
//! - [`RequestOptions`]: headers, body and debug sink supplied by callers
//! - [`HttpRequest`]: a fully-resolved request handed to a transport
//! - [`HttpResponse`]: status, headers and body of a response
//! - [`DebugOutput`]: a sink for request/response traces
//! - [`HttpError`]: unified error type for transports
//!
//! # Example
//!
//! ```rust,ignore
//! use simple_api_client::clients::{HttpClient, HttpMethod, HttpRequest, Transport};
//!
//! let client = HttpClient::new(None)?;
//! let request = HttpRequest::new(HttpMethod::Get, "https://example.com/coupon_types");
//! let response = client.send(request).await?;
//! println!("{}: {}", response.code, response.text());
//! ```

mod debug_output;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use debug_output::DebugOutput;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, Transport, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, RequestBody, RequestOptions, JSON_CONTENT_TYPE};
pub use http_response::HttpResponse;
