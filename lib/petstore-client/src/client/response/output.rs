/// Captured response body, classified by content type.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Output {
    /// No body (e.g. `204 No Content` or a missing content type).
    Empty,
    /// An `application/json` body, kept as raw text until decoded.
    Json(String),
    /// A `text/*` body.
    Text(String),
    /// An `application/octet-stream` body.
    Bytes(Vec<u8>),
    /// Any other content type, kept as text for diagnostics.
    Other {
        /// The response body.
        body: String,
    },
}
