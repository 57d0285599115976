use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::HeaderValue;
use reqwest::header::{AUTHORIZATION, HeaderName};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Errors that can occur during authentication processing.
///
/// This enum provides granular error information for authentication-related failures,
/// allowing for more specific error handling and better debugging.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// Bearer token contains invalid characters for HTTP headers.
    #[display("Bearer token contains invalid characters: {message}")]
    InvalidBearerToken {
        /// Description of the invalid characters or format issue.
        message: String,
    },

    /// Basic authentication credentials could not be encoded into a header.
    #[display("Basic auth credentials contain invalid characters: {message}")]
    InvalidBasicCredentials {
        /// Description of the invalid characters or format issue.
        message: String,
    },

    /// API key header name is invalid.
    #[display("Invalid API key header name '{header_name}': {message}")]
    InvalidHeaderName {
        /// The invalid header name that was provided.
        header_name: String,
        /// Description of why the header name is invalid.
        message: String,
    },

    /// API key value contains invalid characters for HTTP headers.
    #[display("API key contains invalid characters: {message}")]
    InvalidApiKey {
        /// Description of the invalid characters or format issue.
        message: String,
    },
}

/// Secure wrapper for sensitive string data that automatically zeroes memory on drop.
///
/// This wrapper ensures that sensitive authentication data is securely cleared from memory
/// when it's no longer needed, providing protection against memory inspection attacks.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new secure string from the provided value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string value.
    ///
    /// # Security Note
    /// The returned reference should not be stored for extended periods
    /// to minimize exposure time of sensitive data.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the SecureString and returns the inner String.
    ///
    /// # Security Note
    /// The caller becomes responsible for the secure handling of the returned String.
    pub fn into_string(mut self) -> String {
        // Clear the original before returning
        std::mem::take(&mut self.0)
    }

    /// Checks if the secure string equals the given string slice.
    ///
    /// This method is provided for convenient testing and comparison without
    /// exposing the internal string value.
    pub fn equals_str(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::mask_sensitive(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl Serialize for SecureString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecureString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl SecureString {
    /// Masks sensitive data for display/logging purposes.
    fn mask_sensitive(value: &str) -> String {
        if value.len() <= 8 {
            "***".to_string()
        } else {
            format!("{}...{}", &value[..4], &value[value.len() - 4..])
        }
    }
}

/// Authentication configuration for API requests.
///
/// This enum supports the authentication methods of the pet-store service: the
/// `api_key` header scheme and token-based schemes carried in the
/// `Authorization` header. Authentication can be configured at the client level
/// and optionally overridden for individual requests through
/// [`RequestOptions`](super::RequestOptions).
///
/// # Security Features
///
/// - **Memory Protection**: Sensitive data is automatically cleared from memory when dropped
/// - **Display Masking**: Credentials are never displayed in full for logging safety
/// - **Debug Safety**: Authentication data is redacted in debug output
///
/// # Examples
///
/// ```rust
/// use petstore_client::Authentication;
///
/// // Bearer token authentication
/// let auth = Authentication::Bearer("my-api-token".into());
///
/// // Basic authentication
/// let auth = Authentication::Basic {
///     username: "user".to_string(),
///     password: "pass".into(),
/// };
///
/// // API key in header (the pet-store `api_key` scheme)
/// let auth = Authentication::ApiKey {
///     header_name: "api_key".to_string(),
///     key: "special-key".into(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Authentication {
    /// Bearer token authentication (RFC 6750).
    /// Adds `Authorization: Bearer <token>` header.
    Bearer(SecureString),

    /// HTTP Basic authentication (RFC 7617).
    /// Adds `Authorization: Basic <base64(username:password)>` header.
    Basic {
        /// The username for Basic authentication.
        username: String,
        /// The password for Basic authentication.
        password: SecureString,
    },

    /// API key authentication with custom header.
    /// Adds `<header_name>: <key>` header.
    ApiKey {
        /// The header name for the API key.
        header_name: String,
        /// The API key value.
        key: SecureString,
    },
}

impl Authentication {
    /// Renders this authentication scheme as a request header pair.
    ///
    /// Header values are marked sensitive so they stay redacted in HTTP logs.
    pub(super) fn to_header(&self) -> Result<(HeaderName, HeaderValue), AuthenticationError> {
        match self {
            Self::Bearer(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                    .map_err(|err| AuthenticationError::InvalidBearerToken {
                        message: err.to_string(),
                    })?;
                value.set_sensitive(true);
                Ok((AUTHORIZATION, value))
            }
            Self::Basic { username, password } => {
                let credentials = BASE64.encode(format!("{username}:{}", password.as_str()));
                let mut value = HeaderValue::from_str(&format!("Basic {credentials}")).map_err(
                    |err| AuthenticationError::InvalidBasicCredentials {
                        message: err.to_string(),
                    },
                )?;
                value.set_sensitive(true);
                Ok((AUTHORIZATION, value))
            }
            Self::ApiKey { header_name, key } => {
                let name = HeaderName::from_bytes(header_name.as_bytes()).map_err(|err| {
                    AuthenticationError::InvalidHeaderName {
                        header_name: header_name.clone(),
                        message: err.to_string(),
                    }
                })?;
                let mut value = HeaderValue::from_str(key.as_str()).map_err(|err| {
                    AuthenticationError::InvalidApiKey {
                        message: err.to_string(),
                    }
                })?;
                value.set_sensitive(true);
                Ok((name, value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_debug_is_redacted() {
        let secret = SecureString::from("super-secret-token");

        insta::assert_debug_snapshot!(secret, @r#"
        SecureString {
            value: "[REDACTED]",
        }
        "#);
    }

    #[test]
    fn test_secure_string_display_is_masked() {
        let secret = SecureString::from("super-secret-token");
        assert_eq!(secret.to_string(), "supe...oken");

        let short = SecureString::from("tiny");
        assert_eq!(short.to_string(), "***");
    }

    #[test]
    fn test_bearer_to_header() {
        let auth = Authentication::Bearer("token-123".into());

        let (name, value) = auth.to_header().expect("valid header");

        assert_eq!(name, AUTHORIZATION);
        assert_eq!(value.to_str().expect("ascii"), "Bearer token-123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_basic_to_header() {
        let auth = Authentication::Basic {
            username: "user".to_string(),
            password: "pass".into(),
        };

        let (name, value) = auth.to_header().expect("valid header");

        assert_eq!(name, AUTHORIZATION);
        // base64("user:pass")
        assert_eq!(value.to_str().expect("ascii"), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_api_key_to_header() {
        let auth = Authentication::ApiKey {
            header_name: "api_key".to_string(),
            key: "special-key".into(),
        };

        let (name, value) = auth.to_header().expect("valid header");

        assert_eq!(name.as_str(), "api_key");
        assert_eq!(value.to_str().expect("ascii"), "special-key");
    }

    #[test]
    fn test_api_key_invalid_header_name() {
        let auth = Authentication::ApiKey {
            header_name: "bad header\n".to_string(),
            key: "key".into(),
        };

        let result = auth.to_header();
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidHeaderName { .. })
        ));
    }
}
