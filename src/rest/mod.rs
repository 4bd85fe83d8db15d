//! Path-building REST client.
//!
//! # Overview
//!
//! - [`ApiClient`]: accumulates path segments and sends them with a terminal action
//! - [`Action`]: the fixed action-to-verb table
//! - [`PathParts`]: the ordered segment buffer
//! - [`resource!`](crate::resource): arbitrary-identifier chaining on top of [`ApiClient`]
//!
//! # Example
//!
//! ```rust,ignore
//! use simple_api_client::{resource, ApiClient, ClientConfig, Host, RequestOptions};
//!
//! let config = ClientConfig::builder()
//!     .host(Host::new("https://example.com/").unwrap())
//!     .build()
//!     .unwrap();
//! let mut client = ApiClient::new(&config)?;
//!
//! // GET https://example.com/coupon_types/1/coupons/1
//! let response = resource!(client, coupon_types(1).coupons(1))
//!     .fetch(RequestOptions::default())
//!     .await?;
//! ```

mod action;
mod client;
mod path;

pub use action::{Action, ParseActionError};
pub use client::ApiClient;
pub use path::PathParts;

/// Appends segments to an [`ApiClient`] using method-call syntax.
///
/// Each `name` or `name(args...)` in the dot-separated chain becomes
/// `client.segment_with("name", [args...])`. Names are not checked
/// against anything; `r#` prefixes of raw identifiers are dropped.
/// Evaluates to `&mut ApiClient`, ready for a terminal action.
///
/// # Example
///
/// ```rust
/// use simple_api_client::{resource, ApiClient, ClientConfig, Host};
///
/// let config = ClientConfig::builder()
///     .host(Host::new("https://example.com/").unwrap())
///     .build()
///     .unwrap();
/// let mut client = ApiClient::new(&config).unwrap();
///
/// let id = 7;
/// resource!(client, coupon_types(1).coupons(id).r#type);
/// assert_eq!(client.full_path(), "https://example.com/coupon_types/1/coupons/7/type");
/// ```
#[macro_export]
macro_rules! resource {
    ($client:expr, $($name:ident $(( $($arg:expr),* $(,)? ))?).+) => {{
        let client = &mut $client;
        $(
            let args: ::std::vec::Vec<::std::string::String> =
                ::std::vec![$($(::std::string::ToString::to_string(&$arg)),*)?];
            client.segment_with(::core::stringify!($name).trim_start_matches("r#"), args);
        )+
        client
    }};
}
