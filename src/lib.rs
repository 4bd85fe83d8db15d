//! # Simple API Client
//!
//! A small REST client that builds resource paths from chained calls and
//! sends them with one of five terminal actions.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Path accumulation with [`ApiClient::segment`], [`ApiClient::segment_with`]
//!   and the [`resource!`] macro
//! - Terminal actions mapped to verbs by [`Action`]:
//!   `create` → POST, `update` → PUT, `upsert` → PATCH, `delete` → DELETE, `fetch` → GET
//! - A pluggable [`Transport`], with a `reqwest`-backed [`HttpClient`] by default
//! - Optional request/response tracing via [`DebugOutput`]
//!
//! ## Quick Start
//!
//! ```rust
//! use simple_api_client::{ApiClient, ClientConfig, Host};
//!
//! let config = ClientConfig::builder()
//!     .host(Host::new("https://example.com/").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let mut client = ApiClient::new(&config).unwrap();
//! client.segment_with("coupon_types", [1]).segment("coupons");
//!
//! assert_eq!(client.full_path(), "https://example.com/coupon_types/1/coupons");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use simple_api_client::{resource, ApiClient, ClientConfig, Host, RequestOptions};
//! use serde_json::json;
//!
//! let config = ClientConfig::builder()
//!     .host(Host::new("https://5f60d84490cf8d00165586ea.mockapi.io/").unwrap())
//!     .build()
//!     .unwrap();
//! let mut client = ApiClient::new(&config)?;
//!
//! // GET /coupon_types
//! client.segment("coupon_types").fetch(RequestOptions::default()).await?;
//!
//! // GET /coupon_types/1/coupons/1
//! resource!(client, coupon_types(1).coupons(1))
//!     .fetch(RequestOptions::default())
//!     .await?;
//!
//! // POST /coupon_types/1/coupons
//! let attrs = json!({
//!     "coupon_typeId": "1",
//!     "name": "Gagoit coupon",
//!     "code": "gagoit",
//!     "coupon_type": 100
//! });
//! resource!(client, coupon_types(1).coupons)
//!     .create(RequestOptions::default().body(attrs))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Verbatim paths**: segments and host are never escaped or normalized
//! - **Always reset**: every terminal action clears the path, whatever the outcome

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ClientConfig, ClientConfigBuilder, Host, Password};
pub use error::ConfigError;

pub use clients::{
    DebugOutput, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RequestBody, RequestOptions, Transport,
};

pub use rest::{Action, ApiClient, ParseActionError, PathParts};
