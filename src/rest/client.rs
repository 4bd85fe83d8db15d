//! Fluent path-building REST client.
//!
//! This module provides [`ApiClient`], which accumulates path segments from
//! chained calls and sends them with one of the terminal [`Action`]s.

use std::future::Future;

use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, RequestOptions, Transport,
    JSON_CONTENT_TYPE,
};
use crate::config::{ClientConfig, Host, Password};
use crate::rest::{Action, PathParts};

/// REST client that builds resource paths from chained calls.
///
/// Segment calls ([`segment`](Self::segment), [`segment_with`](Self::segment_with),
/// or the [`resource!`](crate::resource) macro) append to the path. A terminal
/// action ([`create`](Self::create), [`update`](Self::update),
/// [`upsert`](Self::upsert), [`delete`](Self::delete), [`fetch`](Self::fetch))
/// sends `host + path` with the action's verb and clears the path.
///
/// Any name is accepted as a segment, so a misspelt resource is only caught
/// by the server.
///
/// The path is cleared when the terminal action is called, before its
/// future is polled. It is therefore empty afterwards whether the request
/// succeeds, fails, or is dropped unfinished, and the client can be reused
/// after an error.
///
/// Every call takes `&mut self`, so one instance serves one caller at a time.
///
/// # Example
///
/// ```rust,ignore
/// use simple_api_client::{ApiClient, ClientConfig, Host, RequestOptions};
/// use serde_json::json;
///
/// let config = ClientConfig::builder()
///     .host(Host::new("https://5f60d84490cf8d00165586ea.mockapi.io/").unwrap())
///     .build()
///     .unwrap();
/// let mut client = ApiClient::new(&config)?;
///
/// // GET /coupon_types/1/coupons
/// let response = client
///     .segment_with("coupon_types", [1])
///     .segment("coupons")
///     .fetch(RequestOptions::default())
///     .await?;
///
/// // POST /coupon_types/1/coupons
/// let options = RequestOptions::default().body(json!({"name": "Gagoit coupon"}));
/// let response = client
///     .segment_with("coupon_types", [1])
///     .segment("coupons")
///     .create(options)
///     .await?;
/// ```
#[derive(Debug)]
pub struct ApiClient<T = HttpClient> {
    config: ClientConfig,
    path_parts: PathParts,
    transport: T,
}

impl ApiClient<HttpClient> {
    /// Creates a client that sends requests with the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let transport = HttpClient::new(Some(config))?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        tracing::debug!("Creating API client for host {}", config.host());

        Self {
            config: config.clone(),
            path_parts: PathParts::new(),
            transport,
        }
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        self.config.host()
    }

    /// Returns the configured username. It is not sent with requests.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.config.username()
    }

    /// Returns the configured password. It is not sent with requests.
    #[must_use]
    pub const fn password(&self) -> Option<&Password> {
        self.config.password()
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Appends a resource name, lower-cased, to the path.
    pub fn segment(&mut self, name: &str) -> &mut Self {
        self.path_parts.push_name(name);
        self
    }

    /// Appends a resource name, lower-cased, followed by each argument as
    /// its own segment.
    ///
    /// ```rust
    /// use simple_api_client::{ApiClient, ClientConfig, Host};
    ///
    /// let config = ClientConfig::builder()
    ///     .host(Host::new("https://example.com/").unwrap())
    ///     .build()
    ///     .unwrap();
    /// let mut client = ApiClient::new(&config).unwrap();
    ///
    /// client.segment_with("coupon_types", [1]).segment_with("coupons", ["a", "b"]);
    /// assert_eq!(client.path(), "coupon_types/1/coupons/a/b");
    /// ```
    pub fn segment_with<I>(&mut self, name: &str, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.path_parts.push_name(name);
        self.path_parts.push_args(args);
        self
    }

    /// Returns the accumulated segments joined by `/`.
    #[must_use]
    pub fn path(&self) -> String {
        self.path_parts.join()
    }

    /// Returns the host followed by [`path`](Self::path), with no separator
    /// inserted between them.
    #[must_use]
    pub fn full_path(&self) -> String {
        format!("{}{}", self.config.host(), self.path())
    }

    /// Sends a POST to the current path.
    pub fn create(
        &mut self,
        options: RequestOptions,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send + '_ {
        self.perform(Action::Create, options)
    }

    /// Sends a PUT to the current path.
    pub fn update(
        &mut self,
        options: RequestOptions,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send + '_ {
        self.perform(Action::Update, options)
    }

    /// Sends a PATCH to the current path.
    pub fn upsert(
        &mut self,
        options: RequestOptions,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send + '_ {
        self.perform(Action::Upsert, options)
    }

    /// Sends a DELETE to the current path.
    pub fn delete(
        &mut self,
        options: RequestOptions,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send + '_ {
        self.perform(Action::Delete, options)
    }

    /// Sends a GET to the current path.
    pub fn fetch(
        &mut self,
        options: RequestOptions,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send + '_ {
        self.perform(Action::Fetch, options)
    }

    /// Sends the current path with `action`'s verb and clears the path.
    ///
    /// `Content-Type: application/json` is always sent, replacing any
    /// caller value for that header. The transport's result is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// The returned future resolves to the transport's [`HttpError`], if any.
    pub fn perform(
        &mut self,
        action: Action,
        options: RequestOptions,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send + '_ {
        let request = self.build_request(action.http_method(), options);
        self.path_parts.clear();

        tracing::debug!("{} -> {} {}", action, request.http_method, request.url);

        self.transport.send(request)
    }

    fn build_request(&self, http_method: HttpMethod, options: RequestOptions) -> HttpRequest {
        let mut headers = options.headers;
        headers.retain(|name, _| !name.eq_ignore_ascii_case("Content-Type"));
        headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());

        HttpRequest {
            http_method,
            url: self.full_path(),
            headers,
            body: options.body,
            debug_output: options
                .debug_output
                .or_else(|| self.config.debug_output().cloned()),
        }
    }
}
