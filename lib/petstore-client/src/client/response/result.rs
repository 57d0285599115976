use std::any::type_name;

use headers::{ContentType, Header as _};
use http::StatusCode;
use http::header::{CONTENT_TYPE, HeaderMap};
use reqwest::Response;
use serde::de::DeserializeOwned;

use super::output::Output;
use crate::client::ApiClientError;

/// A decoded response value paired with its HTTP metadata.
///
/// `HttpInfo` is the "with metadata" result envelope: it carries the decoded
/// value together with the response status code and headers. Operations
/// without a response body use `HttpInfo<()>`.
///
/// # Examples
///
/// ```rust,no_run
/// use petstore_client::ApiClient;
/// use petstore_client::apis::{GetPetByIdParams, PetApi};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder().with_host("petstore.example.com").build()?;
/// let api = PetApi::new(client);
///
/// let info = api
///     .get_pet_by_id_with_http_info(GetPetByIdParams { pet_id: 5 }, None)
///     .await?;
///
/// println!("status: {}", info.status());
/// println!("pet: {:?}", info.data());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpInfo<T> {
    status: StatusCode,
    headers: HeaderMap,
    data: T,
}

impl<T> HttpInfo<T> {
    /// Creates an envelope from its parts.
    ///
    /// Mostly useful when implementing a custom transport strategy or a test
    /// stub; the built-in HTTP transports construct envelopes themselves.
    pub fn new(status: StatusCode, headers: HeaderMap, data: T) -> Self {
        Self {
            status,
            headers,
            data,
        }
    }

    /// The response status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A reference to the decoded value.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the envelope, keeping only the decoded value.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Consumes the envelope into its parts.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, T) {
        (self.status, self.headers, self.data)
    }

    /// Maps the decoded value, keeping status and headers.
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> HttpInfo<U> {
        HttpInfo {
            status: self.status,
            headers: self.headers,
            data: transform(self.data),
        }
    }
}

/// The captured result of an executed API call.
///
/// Holds the response status, headers, and classified body. The `as_*`
/// methods decode the body into a typed value; the `*_with_info` variants
/// wrap the same decoding result in an [`HttpInfo`] envelope.
#[derive(Debug, Clone)]
pub struct CallResult {
    status: StatusCode,
    headers: HeaderMap,
    content_type: Option<ContentType>,
    output: Output,
}

impl CallResult {
    pub(in crate::client) async fn new(response: Response) -> Result<Self, ApiClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        let content_type = Self::extract_content_type(&response)?;
        let output = Self::process_response_body(response, &content_type, status).await?;

        Ok(Self {
            status,
            headers,
            content_type,
            output,
        })
    }

    /// Extracts and parses the Content-Type header from the HTTP response.
    fn extract_content_type(response: &Response) -> Result<Option<ContentType>, ApiClientError> {
        let content_type = response
            .headers()
            .get_all(CONTENT_TYPE)
            .iter()
            .collect::<Vec<_>>();

        if content_type.is_empty() {
            Ok(None)
        } else {
            let parsed = ContentType::decode(&mut content_type.into_iter()).map_err(|_| {
                ApiClientError::SerializationError {
                    message: "invalid Content-Type header in response".to_string(),
                }
            })?;
            Ok(Some(parsed))
        }
    }

    /// Classifies the response body based on content type and status code.
    async fn process_response_body(
        response: Response,
        content_type: &Option<ContentType>,
        status: StatusCode,
    ) -> Result<Output, ApiClientError> {
        if let Some(content_type) = content_type
            && status != StatusCode::NO_CONTENT
        {
            if *content_type == ContentType::json() {
                let json = response.text().await?;
                Ok(Output::Json(json))
            } else if *content_type == ContentType::octet_stream() {
                let bytes = response.bytes().await?;
                Ok(Output::Bytes(bytes.to_vec()))
            } else if content_type.to_string().starts_with("text/") {
                let text = response.text().await?;
                Ok(Output::Text(text))
            } else {
                let body = response.text().await?;
                Ok(Output::Other { body })
            }
        } else {
            Ok(Output::Empty)
        }
    }

    /// The response status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The parsed Content-Type of the response, if present.
    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }

    /// Decodes the response body as JSON into `T`.
    ///
    /// Decoding failures carry the JSON path at which deserialization went
    /// wrong, along with the offending body.
    pub fn as_json<T: DeserializeOwned>(self) -> Result<T, ApiClientError> {
        match self.output {
            Output::Json(json) => {
                let mut deserializer = serde_json::Deserializer::from_str(&json);
                serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
                    let path = err.path().to_string();
                    ApiClientError::JsonError {
                        path,
                        error: err.into_inner(),
                        body: json.clone(),
                    }
                })
            }
            output => Err(ApiClientError::UnsupportedJsonOutput {
                output,
                name: type_name::<T>(),
            }),
        }
    }

    /// Extracts the response body as text.
    pub fn as_text(self) -> Result<String, ApiClientError> {
        match self.output {
            Output::Text(text) | Output::Json(text) | Output::Other { body: text } => Ok(text),
            output => Err(ApiClientError::UnsupportedTextOutput { output }),
        }
    }

    /// Extracts the response body as raw bytes.
    pub fn as_bytes(self) -> Result<Vec<u8>, ApiClientError> {
        match self.output {
            Output::Bytes(bytes) => Ok(bytes),
            Output::Json(text) | Output::Text(text) | Output::Other { body: text } => {
                Ok(text.into_bytes())
            }
            output => Err(ApiClientError::UnsupportedBytesOutput { output }),
        }
    }

    /// Discards the response body.
    ///
    /// Operations without a meaningful response body use this; any body the
    /// server did send is dropped, matching the fire-and-forget semantics of
    /// delete/update style endpoints.
    pub fn as_empty(self) -> Result<(), ApiClientError> {
        Ok(())
    }

    /// Decodes the body as JSON, wrapped with status and headers.
    pub fn json_with_info<T: DeserializeOwned>(self) -> Result<HttpInfo<T>, ApiClientError> {
        let status = self.status;
        let headers = self.headers.clone();
        let data = self.as_json()?;
        Ok(HttpInfo::new(status, headers, data))
    }

    /// Extracts the body as text, wrapped with status and headers.
    pub fn text_with_info(self) -> Result<HttpInfo<String>, ApiClientError> {
        let status = self.status;
        let headers = self.headers.clone();
        let data = self.as_text()?;
        Ok(HttpInfo::new(status, headers, data))
    }

    /// Discards the body, keeping status and headers in the envelope.
    pub fn empty_with_info(self) -> Result<HttpInfo<()>, ApiClientError> {
        let status = self.status;
        let headers = self.headers.clone();
        self.as_empty()?;
        Ok(HttpInfo::new(status, headers, ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_output(output: Output) -> CallResult {
        let content_type = match &output {
            Output::Json(_) => Some(ContentType::json()),
            Output::Text(_) => Some(ContentType::text()),
            _ => None,
        };
        CallResult {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            content_type,
            output,
        }
    }

    #[test]
    fn test_as_json_decodes_value() {
        let result = result_with_output(Output::Json(r#"{"id": 5, "name": "rex"}"#.to_string()));

        let value: serde_json::Value = result.as_json().expect("valid json");

        assert_eq!(value["id"], 5);
        assert_eq!(value["name"], "rex");
    }

    #[test]
    fn test_as_json_reports_path_on_failure() {
        #[derive(Debug, serde::Deserialize)]
        struct Expected {
            #[allow(dead_code)]
            id: u32,
        }

        let result = result_with_output(Output::Json(r#"{"id": "not-a-number"}"#.to_string()));

        let error = result.as_json::<Expected>().expect_err("type mismatch");
        let ApiClientError::JsonError { path, .. } = error else {
            panic!("expected a JsonError, got {error}");
        };
        assert_eq!(path, "id");
    }

    #[test]
    fn test_as_json_rejects_empty_output() {
        let result = result_with_output(Output::Empty);

        let error = result.as_json::<serde_json::Value>().expect_err("no body");
        assert!(matches!(
            error,
            ApiClientError::UnsupportedJsonOutput { .. }
        ));
    }

    #[test]
    fn test_as_empty_discards_any_body() {
        result_with_output(Output::Empty).as_empty().expect("empty");
        result_with_output(Output::Json("{}".to_string()))
            .as_empty()
            .expect("json body discarded");
    }

    #[test]
    fn test_empty_with_info_keeps_status() {
        let info = result_with_output(Output::Empty)
            .empty_with_info()
            .expect("empty");

        assert_eq!(info.status(), StatusCode::OK);
        let () = *info.data();
    }

    #[test]
    fn test_http_info_map_preserves_metadata() {
        let info = HttpInfo::new(StatusCode::CREATED, HeaderMap::new(), 41).map(|value| value + 1);

        assert_eq!(info.status(), StatusCode::CREATED);
        assert_eq!(*info.data(), 42);
    }
}
