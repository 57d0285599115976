use std::fmt::Display;

use http::header::{HeaderMap, HeaderName, HeaderValue};
use indexmap::IndexMap;

use crate::client::ApiClientError;

/// A collection of HTTP request headers.
///
/// Headers keep their insertion order; adding a header with an existing name
/// replaces its value. Values are validated lazily when the request is built,
/// so invalid names or values surface as [`ApiClientError`]s at call time.
///
/// # Examples
///
/// ```rust
/// use petstore_client::CallHeaders;
///
/// let headers = CallHeaders::new()
///     .add_header("api_key", "special-key")
///     .add_header("x-request-id", 42);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallHeaders {
    headers: IndexMap<String, String>,
}

impl CallHeaders {
    /// Creates a new empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header with the given name and value.
    pub fn add_header(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.headers.insert(name.into(), value.to_string());
        self
    }

    /// Merges another header collection into this one.
    ///
    /// Headers from `other` win on name collision; this is what makes per-call
    /// override headers take precedence over client-wide defaults.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (name, value) in other.headers {
            self.headers.insert(name, value);
        }
        self
    }

    pub(crate) fn to_header_map(&self) -> Result<HeaderMap, ApiClientError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            map.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }
        Ok(map)
    }
}
