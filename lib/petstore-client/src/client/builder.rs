use http::Uri;
use http::uri::{PathAndQuery, Scheme};

use super::auth::Authentication;
use super::{ApiClient, ApiClientError};

/// Builder for creating [`ApiClient`] instances.
///
/// # Default Configuration
///
/// - **Scheme**: HTTP (use `with_scheme()` to change to HTTPS)
/// - **Host**: 127.0.0.1 (localhost)
/// - **Port**: 80
/// - **Base path**: None (requests go to the root path)
/// - **Authentication**: None
/// - **User agent**: `petstore-client/<version>`
///
/// # Example
///
/// ```rust
/// use http::uri::Scheme;
/// use petstore_client::{ApiClient, Authentication};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_scheme(Scheme::HTTPS)
///     .with_host("petstore3.swagger.io")
///     .with_port(443)
///     .with_base_path("/api/v3")?
///     .with_authentication(Authentication::ApiKey {
///         header_name: "api_key".to_string(),
///         key: "special-key".into(),
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    client: Option<reqwest::Client>,
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: Option<PathAndQuery>,
    authentication: Option<Authentication>,
    user_agent: String,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            scheme: Scheme::HTTP,
            host: "127.0.0.1".to_string(),
            port: 80,
            base_path: None,
            authentication: None,
            user_agent: format!("petstore-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiClientBuilder {
    /// Builds the final [`ApiClient`] instance with all configured settings.
    ///
    /// # Errors
    ///
    /// This method can fail if:
    /// - The base URI cannot be constructed from the provided scheme, host, and port
    /// - The underlying HTTP client cannot be constructed
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let Self {
            client,
            scheme,
            host,
            port,
            base_path,
            authentication,
            user_agent,
        } = self;

        let client = match client {
            Some(client) => client,
            None => reqwest::Client::builder().user_agent(user_agent).build()?,
        };

        let builder = Uri::builder()
            .scheme(scheme)
            .authority(format!("{host}:{port}"));
        let builder = if let Some(path) = &base_path {
            builder.path_and_query(path.path())
        } else {
            builder.path_and_query("/")
        };
        let base_uri = builder.build()?;

        Ok(ApiClient {
            client,
            base_uri,
            authentication,
        })
    }

    /// Sets the HTTP scheme (protocol) for the API client.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the hostname for the API client.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port number for the API client.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the base path prepended to all request paths (e.g. `/api/v3`).
    ///
    /// # Errors
    ///
    /// Fails if the path is not a valid URI path.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Result<Self, ApiClientError> {
        let base_path = base_path.into();
        let parsed = PathAndQuery::try_from(base_path.as_str()).map_err(|err| {
            ApiClientError::InvalidBasePath {
                error: format!("{base_path:?}: {err}"),
            }
        })?;
        self.base_path = Some(parsed);
        Ok(self)
    }

    /// Sets the client-wide authentication scheme.
    ///
    /// Individual calls can override it through
    /// [`RequestOptions`](super::RequestOptions).
    #[must_use]
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    ///
    /// Ignored when a custom [`reqwest::Client`] is supplied via
    /// [`with_client`](Self::with_client).
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Supplies a pre-configured [`reqwest::Client`].
    ///
    /// Useful for tuning connection pooling, TLS, or proxy settings beyond
    /// what this builder exposes.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }
}
