use headers::ContentType;
use serde::Serialize;

use crate::client::ApiClientError;

/// A file payload for multipart upload operations.
///
/// # Examples
///
/// ```rust
/// use petstore_client::HttpFile;
///
/// let file = HttpFile::new("dog.png", vec![0x89, 0x50, 0x4e, 0x47])
///     .with_content_type(mime::IMAGE_PNG);
/// ```
#[derive(Clone, PartialEq, derive_more::Debug)]
pub struct HttpFile {
    /// The file name reported to the server.
    pub file_name: String,
    /// The raw file content.
    #[debug(ignore)]
    pub content: Vec<u8>,
    /// The media type of the content, when known.
    pub content_type: Option<mime::Mime>,
}

impl HttpFile {
    /// Creates a file payload from a name and raw content.
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
            content_type: None,
        }
    }

    /// Sets the media type of the content.
    #[must_use]
    pub fn with_content_type(mut self, content_type: mime::Mime) -> Self {
        self.content_type = Some(content_type);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
enum PartData {
    Text(String),
    File(HttpFile),
}

/// A `multipart/form-data` request body under construction.
///
/// Parts are sent in insertion order. Text parts carry plain values; file
/// parts carry an [`HttpFile`] with its name and optional media type.
///
/// # Examples
///
/// ```rust
/// use petstore_client::{HttpFile, MultipartForm};
///
/// let form = MultipartForm::new()
///     .add_text("additionalMetadata", "profile picture")
///     .add_file("file", HttpFile::new("dog.png", vec![1, 2, 3]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<(String, PartData)>,
}

impl MultipartForm {
    /// Creates an empty multipart form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text part.
    #[must_use]
    pub fn add_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push((name.into(), PartData::Text(value.into())));
        self
    }

    /// Adds a file part.
    #[must_use]
    pub fn add_file(mut self, name: impl Into<String>, file: HttpFile) -> Self {
        self.parts.push((name.into(), PartData::File(file)));
        self
    }

    /// Whether the form has no parts yet.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub(crate) fn into_form(self) -> Result<reqwest::multipart::Form, ApiClientError> {
        let mut form = reqwest::multipart::Form::new();
        for (name, data) in self.parts {
            let part = match data {
                PartData::Text(value) => reqwest::multipart::Part::text(value),
                PartData::File(file) => {
                    let part = reqwest::multipart::Part::bytes(file.content)
                        .file_name(file.file_name);
                    match file.content_type {
                        Some(content_type) => part.mime_str(content_type.as_ref())?,
                        None => part,
                    }
                }
            };
            form = form.part(name, part);
        }
        Ok(form)
    }
}

#[derive(Clone, derive_more::Debug)]
pub(crate) enum BodyKind {
    Raw {
        content_type: ContentType,
        #[debug(ignore)]
        data: Vec<u8>,
    },
    Multipart(MultipartForm),
}

/// Represents the body of an HTTP request with its content type.
///
/// `CallBody` encapsulates the raw body data and content type needed for API
/// requests. It supports JSON, form-encoded, and multipart payloads.
#[derive(Clone, derive_more::Debug)]
pub struct CallBody {
    pub(crate) kind: BodyKind,
}

impl CallBody {
    /// Creates a JSON body from a serializable type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use petstore_client::CallBody;
    /// # use petstore_client::models::Pet;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let pet = Pet::new("doggie", vec!["https://example.com/dog.png".to_string()]);
    /// let body = CallBody::json(&pet)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn json<T>(data: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec(data)?;
        Ok(Self {
            kind: BodyKind::Raw {
                content_type: ContentType::json(),
                data,
            },
        })
    }

    /// Creates a form-encoded body from a serializable type.
    ///
    /// The data is serialized as `application/x-www-form-urlencoded`; a
    /// sequence of name/value pairs serializes each pair in order.
    pub fn form<T>(data: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize,
    {
        let data = serde_urlencoded::to_string(data)
            .map_err(|err| ApiClientError::SerializationError {
                message: format!("Failed to serialize form data: {err}"),
            })?
            .into_bytes();
        Ok(Self {
            kind: BodyKind::Raw {
                content_type: ContentType::form_url_encoded(),
                data,
            },
        })
    }

    /// Creates a multipart body from a [`MultipartForm`].
    pub fn multipart(form: MultipartForm) -> Self {
        Self {
            kind: BodyKind::Multipart(form),
        }
    }
}
