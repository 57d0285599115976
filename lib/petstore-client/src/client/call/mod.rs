use std::time::Duration;

use http::{Method, Uri};

use super::auth::Authentication;
use super::parameters::{CallBody, CallHeaders, CallPath, CallQuery};
use super::response::ExpectedStatusCodes;

pub(in crate::client) const BODY_MAX_LENGTH: usize = 1024;

mod builder;
mod execution;
#[cfg(test)]
mod tests;

/// Builder for a single HTTP request against the pet-store service.
///
/// `ApiCall` provides a fluent interface for configuring one request: query
/// parameters, headers, body, expected status codes, and per-call
/// [`RequestOptions`](super::RequestOptions) overrides. It implements
/// [`IntoFuture`](std::future::IntoFuture), so a fully configured call is
/// executed by `.await`ing it directly, resolving to a
/// [`CallResult`](super::CallResult).
///
/// # Example
///
/// ```rust,no_run
/// use petstore_client::ApiClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder().with_host("petstore.example.com").build()?;
///
/// let inventory: std::collections::HashMap<String, i32> = client
///     .get("/store/inventory")
///     .await?
///     .as_json()?;
/// # Ok(())
/// # }
/// ```
///
/// # Default Behavior
///
/// - **Status codes**: 200..300 accepted; anything else fails the call
/// - **Content-Type**: set automatically from the body constructor used
/// - **Authentication**: inherited from the client unless overridden
#[derive(derive_more::Debug)]
pub struct ApiCall {
    pub(super) client: reqwest::Client,
    pub(super) base_uri: Uri,

    pub(super) method: Method,
    pub(super) path: CallPath,
    pub(super) query: CallQuery,
    pub(super) headers: Option<CallHeaders>,

    #[debug(ignore)]
    pub(super) body: Option<CallBody>,

    pub(super) authentication: Option<Authentication>,
    pub(super) timeout: Option<Duration>,
    /// Expected status codes for this request (default: 200..300)
    pub(super) expected_status_codes: ExpectedStatusCodes,
}
