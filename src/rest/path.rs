//! Path segment buffer.
//!
//! Segments are kept in call order and joined with `/`. Nothing is
//! validated, escaped, or URL-encoded: a segment containing `/` or `?`
//! reaches the wire as written.

use std::fmt;

/// Ordered path segments accumulated by chained calls.
///
/// # Example
///
/// ```rust
/// use simple_api_client::PathParts;
///
/// let mut parts = PathParts::new();
/// parts.push_name("Coupon_Types");
/// parts.push_args([1]);
/// parts.push_name("coupons");
///
/// assert_eq!(parts.join(), "coupon_types/1/coupons");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathParts {
    parts: Vec<String>,
}

impl PathParts {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a resource name, lower-cased.
    pub fn push_name(&mut self, name: &str) {
        self.parts.push(name.to_lowercase());
    }

    /// Appends each argument as its own segment, verbatim.
    pub fn push_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.parts.extend(args.into_iter().map(|arg| arg.to_string()));
    }

    /// Returns the segments joined by `/`.
    #[must_use]
    pub fn join(&self) -> String {
        self.parts.join("/")
    }

    /// Returns `true` if no segment has been pushed since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.parts.clear();
    }
}

impl fmt::Display for PathParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}
