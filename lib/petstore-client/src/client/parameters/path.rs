use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use super::param::{ParamValue, ParameterValue, ResolvedParamValue};
use crate::client::ApiClientError;

/// Regular expression for matching path parameters in the format `{param_name}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

/// URL-encode a path parameter value using percent-encoding.
fn encode_path_param_value(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// A parameterized HTTP path with type-safe parameter substitution.
///
/// `CallPath` represents an HTTP path template with named parameters that can
/// be substituted with typed values before the request is sent.
///
/// # Examples
///
/// ```rust
/// use petstore_client::{CallPath, ParamValue};
///
/// let path = CallPath::from("/pet/{petId}")
///     .add_param("petId", ParamValue::new(42));
///
/// // Path resolves to: /pet/42
/// ```
///
/// # Path Template Syntax
///
/// Path templates use `{parameter_name}` syntax for parameter placeholders.
/// Parameter names must be valid identifiers (alphanumeric + underscore).
/// The same parameter can appear multiple times in a single path.
#[derive(Debug, Clone, Default, derive_more::Display)]
#[display("{path}")]
pub struct CallPath {
    /// The path template with parameter placeholders
    pub(crate) path: String,
    /// Resolved parameter values indexed by parameter name
    args: IndexMap<String, ResolvedParamValue>,
}

impl CallPath {
    /// Adds a path parameter with the given name and value.
    ///
    /// Accepts any value convertible into a [`ParamValue<T>`], so scalars can
    /// be passed directly and `ParamValue::with_style` used when an array
    /// needs a specific join style.
    ///
    /// A value that cannot be serialized is skipped with a warning; path
    /// resolution will then fail with the parameter reported as missing.
    pub fn add_param<T: ParameterValue>(
        mut self,
        name: impl Into<String>,
        param: impl Into<ParamValue<T>>,
    ) -> Self {
        let name = name.into();
        match param.into().resolve() {
            Ok(resolved) => {
                self.args.insert(name, resolved);
            }
            Err(error) => {
                warn!(?name, %error, "failed to serialize path parameter value");
            }
        }
        self
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(value: String) -> Self {
        Self {
            path: value,
            args: IndexMap::default(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct PathResolved {
    pub(crate) path: String,
}

// Build concrete
impl TryFrom<CallPath> for PathResolved {
    type Error = ApiClientError;

    fn try_from(value: CallPath) -> Result<Self, Self::Error> {
        let CallPath { mut path, args } = value;

        let mut names: std::collections::HashSet<String> = RE
            .captures_iter(&path)
            .filter_map(|caps| caps.name("name"))
            .map(|matched| matched.as_str().to_string())
            .collect();

        if names.is_empty() {
            return Ok(Self { path });
        }

        for (name, resolved) in args {
            if !names.remove(&name) {
                warn!(?name, "argument name not found");
                continue;
            }

            let path_value = match resolved.to_string_value() {
                Ok(value) => value,
                Err(error) => {
                    warn!(?resolved.value, %error, "failed to render path parameter value");
                    continue;
                }
            };

            let encoded_value = encode_path_param_value(&path_value);
            path = replace_path_param(&path, &name, &encoded_value);

            if names.is_empty() {
                return Ok(Self { path });
            }
        }

        Err(ApiClientError::PathUnresolved {
            path,
            missings: names.into_iter().collect(),
        })
    }
}
