//! The HTTP transport core: client construction, request building, and
//! response decoding.
//!
//! The resource facades in [`crate::apis`] sit on top of this module; direct
//! use of [`ApiClient`]/[`ApiCall`] is only needed for endpoints the facades
//! don't cover.

use http::{Method, Uri};

mod builder;
pub use self::builder::ApiClientBuilder;

mod call;
pub use self::call::ApiCall;

mod parameters;
pub use self::parameters::{
    CallBody, CallHeaders, CallPath, CallQuery, HttpFile, MultipartForm, ParamStyle, ParamValue,
    ParameterValue,
};

mod response;
pub use self::response::{CallResult, ExpectedStatusCodes, HttpInfo, Output};

mod auth;
pub use self::auth::{Authentication, AuthenticationError, SecureString};

mod options;
pub use self::options::RequestOptions;

mod error;
pub use self::error::ApiClientError;

/// HTTP client for the pet-store service.
///
/// `ApiClient` owns the underlying [`reqwest::Client`], the base URI, and the
/// client-wide authentication. It is cheap to clone and safe to share across
/// tasks: every call gets its own independent [`ApiCall`] and no per-call
/// state lives on the client.
///
/// # Example
///
/// ```rust,no_run
/// use petstore_client::ApiClient;
/// use petstore_client::models::Pet;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_host("petstore.example.com")
///     .build()?;
///
/// let pet: Pet = client.get("/pet/5").await?.as_json()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_uri: Uri,
    authentication: Option<Authentication>,
}

// Create
impl ApiClient {
    /// Starts building a client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }
}

impl ApiClient {
    /// Starts a call with an explicit HTTP method.
    pub fn call(&self, method: Method, path: CallPath) -> ApiCall {
        ApiCall::build(
            self.client.clone(),
            self.base_uri.clone(),
            method,
            path,
            self.authentication.clone(),
        )
    }

    /// Starts a GET call.
    pub fn get(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::GET, path.into())
    }

    /// Starts a POST call.
    pub fn post(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::POST, path.into())
    }

    /// Starts a PUT call.
    pub fn put(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::PUT, path.into())
    }

    /// Starts a DELETE call.
    pub fn delete(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::DELETE, path.into())
    }

    /// Starts a PATCH call.
    pub fn patch(&self, path: impl Into<CallPath>) -> ApiCall {
        self.call(Method::PATCH, path.into())
    }
}
