use std::fmt::Display;
use std::time::Duration;

use http::Uri;

use super::auth::Authentication;
use super::parameters::CallHeaders;

/// Per-call overrides for client-wide configuration.
///
/// Every facade operation accepts an optional `RequestOptions`. Each populated
/// field supersedes the corresponding client-wide default for that single
/// call; absent fields inherit the default. Options are consumed by the call
/// and never change the client's subsequent behavior.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use petstore_client::{Authentication, RequestOptions};
///
/// let options = RequestOptions::new()
///     .with_header("x-request-id", "abc-123")
///     .with_authentication(Authentication::ApiKey {
///         header_name: "api_key".to_string(),
///         key: "special-key".into(),
///     })
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(super) base_uri: Option<Uri>,
    pub(super) headers: Option<CallHeaders>,
    pub(super) authentication: Option<Authentication>,
    pub(super) timeout: Option<Duration>,
}

impl RequestOptions {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the base URI (scheme, authority, and base path) for this call.
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: Uri) -> Self {
        self.base_uri = Some(base_uri);
        self
    }

    /// Adds a single extra header for this call.
    ///
    /// Extra headers are applied after the call's own headers, so they win on
    /// name collision.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Display) -> Self {
        let headers = self
            .headers
            .take()
            .unwrap_or_default()
            .add_header(name, value);
        self.headers = Some(headers);
        self
    }

    /// Merges a header collection into this call's extra headers.
    #[must_use]
    pub fn with_headers(mut self, headers: CallHeaders) -> Self {
        let merged = match self.headers.take() {
            Some(existing) => existing.merge(headers),
            None => headers,
        };
        self.headers = Some(merged);
        self
    }

    /// Overrides the authentication scheme for this call.
    #[must_use]
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Sets a request timeout for this call.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
