use indexmap::IndexMap;
use tracing::warn;

use super::param::{ParamValue, ParameterValue, ResolvedParamValue};
use crate::client::ApiClientError;

/// A collection of query parameters for HTTP requests.
///
/// Parameters keep their insertion order. Array values are serialized in the
/// form style by default (the key is repeated: `?status=available&status=pending`);
/// space- and pipe-delimited styles are available through
/// [`ParamValue::with_style`].
///
/// # Examples
///
/// ```rust
/// use petstore_client::{CallQuery, ParamValue};
///
/// let query = CallQuery::new()
///     .add_param("username", ParamValue::new("user1"))
///     .add_param("status", ParamValue::new(vec!["available", "pending"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallQuery {
    params: IndexMap<String, ResolvedParamValue>,
}

impl CallQuery {
    /// Creates a new empty query parameter collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter with the given name and value.
    ///
    /// A value that cannot be serialized is skipped with a warning rather than
    /// poisoning the whole query.
    pub fn add_param<T: ParameterValue>(
        mut self,
        name: impl Into<String>,
        param: impl Into<ParamValue<T>>,
    ) -> Self {
        let name = name.into();
        match param.into().resolve() {
            Ok(resolved) => {
                self.params.insert(name, resolved);
            }
            Err(error) => {
                warn!(?name, %error, "failed to serialize query parameter value");
            }
        }
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Serializes the parameters into a URL-encoded query string.
    pub(crate) fn to_query_string(&self) -> Result<String, ApiClientError> {
        let mut pairs = Vec::new();
        for (name, resolved) in &self.params {
            pairs.extend(resolved.to_query_pairs(name)?);
        }
        let query = serde_urlencoded::to_string(pairs)?;
        Ok(query)
    }
}
