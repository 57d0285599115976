use std::fmt::Debug;

use serde::Serialize;

use crate::client::ApiClientError;

/// Marker trait for values usable as path or query parameters.
///
/// Blanket-implemented for every serializable, debuggable type, so plain
/// numbers, strings, enums, and arrays of those all qualify without extra
/// ceremony.
pub trait ParameterValue: Serialize + Debug {}

impl<T> ParameterValue for T where T: Serialize + Debug {}

/// Serialization styles for array-valued parameters.
///
/// Scalars render the same in every style; the style only decides how array
/// items are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamStyle {
    /// Position-dependent default: comma-joined in paths, repeated keys in queries.
    #[default]
    Default,
    /// Comma-joined items (`a,b,c`).
    Simple,
    /// Repeated query keys (`?tags=a&tags=b`); comma-joined in paths.
    Form,
    /// Space-joined items (`a b c`).
    SpaceDelimited,
    /// Pipe-joined items (`a|b|c`).
    PipeDelimited,
}

/// A typed parameter value with an optional serialization style.
///
/// # Examples
///
/// ```rust
/// use petstore_client::{ParamStyle, ParamValue};
///
/// // Plain scalar
/// let id = ParamValue::new(42);
///
/// // Array with an explicit style
/// let tags = ParamValue::with_style(vec!["small", "fluffy"], ParamStyle::PipeDelimited);
/// ```
#[derive(Debug, Clone)]
pub struct ParamValue<T> {
    value: T,
    style: ParamStyle,
}

impl<T: ParameterValue> ParamValue<T> {
    /// Creates a parameter value with the default style.
    pub fn new(value: T) -> Self {
        Self {
            value,
            style: ParamStyle::Default,
        }
    }

    /// Creates a parameter value with an explicit style.
    pub fn with_style(value: T, style: ParamStyle) -> Self {
        Self { value, style }
    }

    pub(crate) fn resolve(&self) -> Result<ResolvedParamValue, ApiClientError> {
        let value = serde_json::to_value(&self.value)?;
        Ok(ResolvedParamValue {
            value,
            style: self.style,
        })
    }
}

impl<T: ParameterValue> From<T> for ParamValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// A parameter value reduced to its JSON representation, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedParamValue {
    pub(crate) value: serde_json::Value,
    pub(crate) style: ParamStyle,
}

fn scalar_to_string(value: &serde_json::Value) -> Result<String, ApiClientError> {
    match value {
        serde_json::Value::String(text) => Ok(text.clone()),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(ApiClientError::UnsupportedParameterValue {
            message: "expected a scalar value".to_string(),
            value: other.clone(),
        }),
    }
}

impl ResolvedParamValue {
    fn delimiter(&self) -> &'static str {
        match self.style {
            ParamStyle::SpaceDelimited => " ",
            ParamStyle::PipeDelimited => "|",
            ParamStyle::Default | ParamStyle::Simple | ParamStyle::Form => ",",
        }
    }

    /// Renders the value as a single string, joining array items per style.
    ///
    /// Used for path segments and delimited query styles. Objects are not
    /// representable in either position.
    pub(crate) fn to_string_value(&self) -> Result<String, ApiClientError> {
        match &self.value {
            serde_json::Value::Array(items) => {
                let rendered = items
                    .iter()
                    .map(scalar_to_string)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(rendered.join(self.delimiter()))
            }
            other => scalar_to_string(other),
        }
    }

    /// Renders the value as query-string pairs.
    ///
    /// Arrays in the default/form style repeat the key; delimited styles join
    /// items into a single pair.
    pub(crate) fn to_query_pairs(&self, name: &str) -> Result<Vec<(String, String)>, ApiClientError> {
        match (&self.value, self.style) {
            (serde_json::Value::Array(items), ParamStyle::Default | ParamStyle::Form) => items
                .iter()
                .map(|item| Ok((name.to_string(), scalar_to_string(item)?)))
                .collect(),
            (serde_json::Value::Array(_), _) => {
                Ok(vec![(name.to_string(), self.to_string_value()?)])
            }
            (other, _) => Ok(vec![(name.to_string(), scalar_to_string(other)?)]),
        }
    }
}
