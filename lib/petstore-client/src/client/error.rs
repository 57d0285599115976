use super::auth::AuthenticationError;
use super::response::Output;

/// Errors that can occur when talking to the pet-store service.
///
/// This enum covers all possible error conditions from network issues to data validation failures.
/// All variants implement `std::error::Error` and provide detailed context for debugging.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when network requests fail, timeouts occur, or connection issues arise.
    ReqwestError(reqwest::Error),

    /// URL parsing error when constructing request URLs.
    ///
    /// Occurs when the base URL or path parameters create an invalid URL.
    UrlError(url::ParseError),

    /// HTTP protocol error from the http crate.
    ///
    /// Occurs when HTTP protocol constraints are violated.
    HttpError(http::Error),

    /// Invalid HTTP header name.
    ///
    /// Occurs when attempting to create headers with invalid names.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    ///
    /// Occurs when header values contain invalid characters.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// JSON serialization/deserialization error.
    ///
    /// Occurs when working with JSON request bodies or responses.
    JsonValueError(serde_json::Error),

    /// Query parameter serialization error.
    ///
    /// Occurs when converting structures to URL query strings.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// Authentication data could not be turned into request headers.
    AuthenticationError(AuthenticationError),

    /// Invalid base path configuration.
    ///
    /// Occurs when the provided base path cannot be used for URL construction.
    #[display("Invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// JSON response deserialization failure.
    ///
    /// Occurs when the response body cannot be parsed as the expected JSON structure.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    JsonError {
        /// The location inside the JSON document where decoding failed.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// Response output type is incompatible with JSON deserialization.
    ///
    /// Occurs when attempting to parse non-JSON responses as JSON.
    #[display("Unsupported output for {name} as JSON:\n{output:?}")]
    #[from(skip)]
    UnsupportedJsonOutput {
        /// The actual response output received.
        output: Output,
        /// Name of the target type that could not be produced.
        name: &'static str,
    },

    /// Response output type is incompatible with text extraction.
    ///
    /// Occurs when attempting to extract text from binary or empty responses.
    #[display("Unsupported output for text:\n{output:?}")]
    #[from(skip)]
    UnsupportedTextOutput {
        /// The actual response output received.
        output: Output,
    },

    /// Response output type is incompatible with byte extraction.
    ///
    /// Occurs when attempting to extract bytes from empty responses.
    #[display("Unsupported output for bytes:\n{output:?}")]
    #[from(skip)]
    UnsupportedBytesOutput {
        /// The actual response output received.
        output: Output,
    },

    /// Path template contains unresolved parameters.
    ///
    /// Occurs when path parameters are missing for templated URLs.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing parameter names.
        missings: Vec<String>,
    },

    /// Parameter value cannot be converted to the required format.
    ///
    /// Occurs when parameter values are incompatible with their target position,
    /// such as objects used as path or query parameters.
    #[display("Unsupported parameter value: {message}. Got: {value}")]
    #[from(skip)]
    UnsupportedParameterValue {
        /// Specific error message describing the conversion failure.
        message: String,
        /// The value that failed to convert.
        value: serde_json::Value,
    },

    /// Data serialization failed.
    ///
    /// Occurs when request data cannot be converted to the required format.
    #[display("Serialization error: {message}")]
    #[from(skip)]
    SerializationError {
        /// Description of the serialization failure.
        message: String,
    },

    /// Server returned an unexpected HTTP status code.
    ///
    /// Occurs when the response status code doesn't match expected values.
    #[display("Unexpected status code {status_code}: {body}")]
    #[from(skip)]
    UnexpectedStatusCode {
        /// The unexpected HTTP status code received.
        status_code: u16,
        /// The response body for debugging.
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ApiClientError>();
        assert_sync::<ApiClientError>();
    }

    #[test]
    fn test_unexpected_status_code_display() {
        let error = ApiClientError::UnexpectedStatusCode {
            status_code: 404,
            body: "pet not found".to_string(),
        };

        insta::assert_snapshot!(error, @"Unexpected status code 404: pet not found");
    }

    #[test]
    fn test_path_unresolved_display() {
        let error = ApiClientError::PathUnresolved {
            path: "/pet/{petId}".to_string(),
            missings: vec!["petId".to_string()],
        };

        insta::assert_snapshot!(error, @r#"Path '/pet/{petId}' is missing required arguments: ["petId"]"#);
    }
}
