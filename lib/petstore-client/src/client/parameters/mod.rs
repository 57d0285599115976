//! Request parameter types for building API calls.
//!
//! This module provides types for handling different kinds of HTTP request parameters:
//!
//! - [`CallPath`] - Path parameters (e.g., `/pet/{petId}`)
//! - [`CallQuery`] - Query string parameters
//! - [`CallHeaders`] - HTTP headers
//! - [`CallBody`] - Request body content (JSON, form, multipart)

mod param;
pub use self::param::{ParamStyle, ParamValue, ParameterValue};

mod path;
pub use self::path::CallPath;
pub(crate) use self::path::PathResolved;

mod query;
pub use self::query::CallQuery;

mod headers;
pub use self::headers::CallHeaders;

mod body;
pub use self::body::{CallBody, HttpFile, MultipartForm};
pub(crate) use self::body::BodyKind;
