//! HTTP response type.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpResponseError;

/// A response returned by a transport.
///
/// Any status code is a successful transport result; use
/// [`error_for_status`](Self::error_for_status) to treat non-2xx codes as errors.
///
/// # Example
///
/// ```rust
/// use simple_api_client::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"[{"id":"1"}]"#);
/// assert!(response.is_ok());
///
/// let coupons: Vec<serde_json::Value> = response.json().unwrap();
/// assert_eq!(coupons[0]["id"], "1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body, byte-for-byte as received.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Converts a non-2xx response into an [`HttpResponseError`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpResponseError`] carrying the status code and body when
    /// the status is outside 200..=299.
    pub fn error_for_status(self) -> Result<Self, HttpResponseError> {
        if self.is_ok() {
            return Ok(self);
        }

        let message = if self.body.is_empty() {
            format!("Request failed with status {}", self.code)
        } else {
            self.text().into_owned()
        };

        Err(HttpResponseError {
            code: self.code,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response_with_body(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    #[test]
    fn test_is_ok_for_2xx_codes() {
        assert!(response_with_body(200, "").is_ok());
        assert!(response_with_body(201, "").is_ok());
        assert!(response_with_body(299, "").is_ok());
        assert!(!response_with_body(199, "").is_ok());
        assert!(!response_with_body(301, "").is_ok());
        assert!(!response_with_body(404, "").is_ok());
        assert!(!response_with_body(500, "").is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        let response = HttpResponse::new(200, headers, Vec::new());

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_json_deserializes_body() {
        #[derive(Deserialize)]
        struct Coupon {
            id: String,
            name: String,
        }

        let response = response_with_body(200, r#"{"id":"7","name":"Gagoit coupon"}"#);
        let coupon: Coupon = response.json().unwrap();

        assert_eq!(coupon.id, "7");
        assert_eq!(coupon.name, "Gagoit coupon");
    }

    #[test]
    fn test_binary_body_is_kept_verbatim() {
        let response = HttpResponse::new(200, HashMap::new(), vec![0xff, 0xfe, 0x00, 0x41]);

        assert_eq!(response.body, vec![0xff_u8, 0xfe, 0x00, 0x41]);
        assert_eq!(response.text(), "\u{fffd}\u{fffd}\u{0}A");
    }

    #[test]
    fn test_json_reports_invalid_body() {
        let response = response_with_body(200, "not json");
        assert!(response.json::<serde_json::Value>().is_err());
    }

    #[test]
    fn test_error_for_status_passes_success_through() {
        let response = response_with_body(204, "");
        assert_eq!(response.clone().error_for_status().unwrap(), response);
    }

    #[test]
    fn test_error_for_status_uses_body_as_message() {
        let error = response_with_body(404, r#""Not found""#)
            .error_for_status()
            .unwrap_err();

        assert_eq!(error.code, 404);
        assert_eq!(error.message, r#""Not found""#);
    }

    #[test]
    fn test_error_for_status_with_empty_body() {
        let error = response_with_body(503, "").error_for_status().unwrap_err();
        assert_eq!(error.message, "Request failed with status 503");
    }
}
