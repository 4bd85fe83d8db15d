//! Request/response tracing sink.
//!
//! A [`DebugOutput`] receives a plain-text dump of every request it is
//! attached to and the response that came back:
//!
//! ```text
//! -> POST https://example.com/coupon_types/1/coupons
//! -> content-type: application/json
//! -> user-agent: Simple API Client v0.1.0 | Rust 1.75
//! ->
//! {"name":"x"}
//! <- 201
//! <- content-type: application/json
//! <-
//! {"id":"7","name":"x"}
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use reqwest::header::HeaderMap;

use crate::clients::http_request::{HttpMethod, RequestBody};
use crate::clients::http_response::HttpResponse;

/// A shared, cloneable writer for request/response traces.
///
/// Clones write to the same underlying sink. Failures while writing are
/// logged and never fail the request being traced.
///
/// # Example
///
/// ```rust
/// use simple_api_client::{DebugOutput, RequestOptions};
///
/// let options = RequestOptions::default().debug_output(DebugOutput::stdout());
/// assert!(options.debug_output.is_some());
/// ```
#[derive(Clone)]
pub struct DebugOutput {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl DebugOutput {
    /// Traces to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Traces to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::from_writer(io::stderr())
    }

    /// Traces to an arbitrary writer.
    #[must_use]
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub(crate) fn write_request(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &HeaderMap,
        body: Option<&RequestBody>,
    ) {
        let mut text = format!("-> {} {url}\n", method.as_str());
        for (name, value) in sorted_headers(headers) {
            text.push_str(&format!("-> {name}: {value}\n"));
        }
        text.push_str("->\n");
        if let Some(body) = body {
            text.push_str(&String::from_utf8_lossy(body.as_bytes()));
            text.push('\n');
        }
        self.write_text(&text);
    }

    pub(crate) fn write_response(&self, response: &HttpResponse) {
        let mut text = format!("<- {}\n", response.code);
        let mut headers: Vec<_> = response.headers.iter().collect();
        headers.sort_by(|a, b| a.0.cmp(b.0));
        for (name, values) in headers {
            for value in values {
                text.push_str(&format!("<- {name}: {value}\n"));
            }
        }
        text.push_str("<-\n");
        if !response.body.is_empty() {
            text.push_str(&response.text());
            text.push('\n');
        }
        self.write_text(&text);
    }

    fn write_text(&self, text: &str) {
        // A panic in another writer must not silence tracing for everyone else
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = sink.write_all(text.as_bytes()).and_then(|()| sink.flush()) {
            tracing::warn!("Failed to write request trace to debug output: {}", error);
        }
    }
}

impl fmt::Debug for DebugOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DebugOutput(..)")
    }
}

fn sorted_headers(headers: &HeaderMap) -> Vec<(&str, String)> {
    let mut pairs: Vec<_> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    pairs.sort();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_request_trace_format() {
        let buffer = SharedBuffer::default();
        let output = DebugOutput::from_writer(buffer.clone());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let body = RequestBody::from(r#"{"name":"x"}"#);

        output.write_request(
            HttpMethod::Post,
            "https://example.com/coupons",
            &headers,
            Some(&body),
        );

        assert_eq!(
            buffer.contents(),
            "-> POST https://example.com/coupons\n\
             -> content-type: application/json\n\
             ->\n\
             {\"name\":\"x\"}\n"
        );
    }

    #[test]
    fn test_response_trace_format() {
        let buffer = SharedBuffer::default();
        let output = DebugOutput::from_writer(buffer.clone());

        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc".to_string()]);
        let response = HttpResponse::new(404, headers, Vec::new());

        output.write_response(&response);

        assert_eq!(buffer.contents(), "<- 404\n<- x-request-id: abc\n<-\n");
    }

    #[test]
    fn test_clones_share_the_sink() {
        let buffer = SharedBuffer::default();
        let output = DebugOutput::from_writer(buffer.clone());
        let cloned = output.clone();

        output.write_text("one\n");
        cloned.write_text("two\n");

        assert_eq!(buffer.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let output = DebugOutput::from_writer(BrokenWriter);
        output.write_text("ignored\n");
    }

    #[test]
    fn test_debug_does_not_expose_writer() {
        assert_eq!(format!("{:?}", DebugOutput::stderr()), "DebugOutput(..)");
    }
}
