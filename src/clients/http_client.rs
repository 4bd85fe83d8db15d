//! HTTP transport.
//!
//! This module provides the [`Transport`] seam that
//! [`ApiClient`](crate::ApiClient) dispatches through, and [`HttpClient`], the
//! default `reqwest`-backed implementation.

use std::collections::HashMap;
use std::future::Future;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A capability that performs one HTTP request.
///
/// Implementations receive the fully-resolved request and return the
/// response, or fail. Any status code is a valid response.
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}

/// `reqwest`-backed HTTP transport.
///
/// The client sends a `User-Agent` and `Accept: application/json` on every
/// request. Headers on the request override these defaults, matching names
/// case-insensitively.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport.
    ///
    /// `config` supplies the optional `User-Agent` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: Option<&ClientConfig>) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .and_then(ClientConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Simple API Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Merges default and request headers into a validated header map.
    fn header_map(&self, headers: &HashMap<String, String>) -> Result<HeaderMap, HttpError> {
        let mut map = HeaderMap::new();
        // Defaults first so request headers replace them
        for (key, value) in self.default_headers.iter().chain(headers) {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
                InvalidHttpRequestError::InvalidHeaderName { name: key.clone() }
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                InvalidHttpRequestError::InvalidHeaderValue { name: key.clone() }
            })?;
            map.insert(name, value);
        }
        Ok(map)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = reqwest::Url::parse(&request.url).map_err(|_| {
            InvalidHttpRequestError::InvalidUrl {
                url: request.url.clone(),
            }
        })?;
        let headers = self.header_map(&request.headers)?;

        if let Some(output) = &request.debug_output {
            output.write_request(
                request.http_method,
                &request.url,
                &headers,
                request.body.as_ref(),
            );
        }

        tracing::debug!("Sending {} request to {}", request.http_method, request.url);

        let mut req_builder = self
            .client
            .request(reqwest_method(request.http_method), url)
            .headers(headers);
        if let Some(body) = request.body {
            req_builder = req_builder.body(body.into_bytes());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?;
        let response = HttpResponse::new(code, res_headers, body.to_vec());

        tracing::debug!(
            "Received {} from {} {}",
            code,
            request.http_method,
            request.url
        );

        if let Some(output) = &request.debug_output {
            output.write_response(&response);
        }

        Ok(response)
    }
}
