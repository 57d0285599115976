use std::future::{Future, IntoFuture};
use std::pin::Pin;

use http::header::CONTENT_TYPE;
use http::{Method, Uri};
use reqwest::Request;
use tracing::debug;
use url::Url;

use super::{ApiCall, BODY_MAX_LENGTH};
use crate::client::auth::Authentication;
use crate::client::parameters::{BodyKind, CallPath, CallQuery, PathResolved};
use crate::client::response::{CallResult, ExpectedStatusCodes};
use crate::client::{ApiClientError, CallBody, CallHeaders};

impl ApiCall {
    pub(in crate::client) fn build(
        client: reqwest::Client,
        base_uri: Uri,
        method: Method,
        path: CallPath,
        authentication: Option<Authentication>,
    ) -> Self {
        Self {
            client,
            base_uri,
            method,
            path,
            query: CallQuery::default(),
            headers: None,
            body: None,
            authentication,
            timeout: None,
            expected_status_codes: ExpectedStatusCodes::default(),
        }
    }
}

impl ApiCall {
    /// Executes the HTTP request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request cannot be built (unresolved path parameters, invalid
    ///   URLs, malformed headers, body serialization failures)
    /// - The HTTP request fails (network issues, timeouts, etc.)
    /// - The response status code is not in the expected range
    async fn exchange(self) -> Result<CallResult, ApiClientError> {
        let Self {
            client,
            base_uri,
            method,
            path,
            query,
            headers,
            body,
            authentication,
            timeout,
            expected_status_codes,
        } = self;

        let url = Self::build_url(&base_uri, &path, &query)?;
        let request = Self::build_request(
            &client,
            method,
            url,
            headers.as_ref(),
            body,
            authentication.as_ref(),
            timeout,
        )?;

        debug!(?request, "sending...");
        let response = client.execute(request).await?;
        debug!(status = ?response.status(), "...receiving");

        let status_code = response.status().as_u16();
        if !expected_status_codes.contains(status_code) {
            // Read the body only if the status code is unexpected
            let body = response
                .text()
                .await
                .map(|text| {
                    if text.len() > BODY_MAX_LENGTH {
                        format!("{}... (truncated)", &text[..BODY_MAX_LENGTH])
                    } else {
                        text
                    }
                })
                .unwrap_or_else(|err| format!("<unable to read response body: {err}>"));
            return Err(ApiClientError::UnexpectedStatusCode { status_code, body });
        }

        CallResult::new(response).await
    }

    pub(super) fn build_url(
        base_uri: &Uri,
        path: &CallPath,
        query: &CallQuery,
    ) -> Result<Url, ApiClientError> {
        let path_resolved = PathResolved::try_from(path.clone())?;
        let base_uri = base_uri.to_string();
        let url = format!(
            "{}/{}",
            base_uri.trim_end_matches('/'),
            path_resolved.path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;

        if !query.is_empty() {
            let query_string = query.to_query_string()?;
            url.set_query(Some(&query_string));
        }

        Ok(url)
    }

    fn build_request(
        client: &reqwest::Client,
        method: Method,
        url: Url,
        headers: Option<&CallHeaders>,
        body: Option<CallBody>,
        authentication: Option<&Authentication>,
        timeout: Option<std::time::Duration>,
    ) -> Result<Request, ApiClientError> {
        let mut builder = client.request(method, url);

        // Authentication header first, so explicit call headers can override it
        if let Some(auth) = authentication {
            let (name, value) = auth.to_header()?;
            builder = builder.header(name, value);
        }

        if let Some(headers) = headers {
            builder = builder.headers(headers.to_header_map()?);
        }

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(body) = body {
            builder = match body.kind {
                BodyKind::Raw { content_type, data } => builder
                    .header(CONTENT_TYPE, content_type.to_string())
                    .body(data),
                BodyKind::Multipart(form) => builder.multipart(form.into_form()?),
            };
        }

        let request = builder.build()?;
        Ok(request)
    }
}

/// Implement IntoFuture for ApiCall to enable direct .await syntax
///
/// ```rust,no_run
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let client = petstore_client::ApiClient::builder().build()?;
/// let result = client.get("/store/inventory").await?;
/// # Ok(())
/// # }
/// ```
impl IntoFuture for ApiCall {
    type Output = Result<CallResult, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exchange())
    }
}
