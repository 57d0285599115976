use std::fmt::Display;
use std::ops::{Range, RangeInclusive};

use serde::Serialize;

use super::ApiCall;
use crate::client::parameters::{CallBody, CallHeaders, CallQuery, MultipartForm};
use crate::client::response::ExpectedStatusCodes;
use crate::client::{ApiClientError, RequestOptions};

impl ApiCall {
    /// Sets the query parameters for this call.
    #[must_use]
    pub fn with_query(mut self, query: CallQuery) -> Self {
        self.query = query;
        self
    }

    /// Merges headers into this call.
    #[must_use]
    pub fn with_headers(mut self, headers: CallHeaders) -> Self {
        let merged = match self.headers.take() {
            Some(existing) => existing.merge(headers),
            None => headers,
        };
        self.headers = Some(merged);
        self
    }

    /// Adds a single header to this call.
    #[must_use]
    pub fn with_header(self, name: impl Into<String>, value: impl Display) -> Self {
        self.with_headers(CallHeaders::new().add_header(name, value))
    }

    /// Sets a JSON request body.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized to JSON.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiClientError> {
        self.body = Some(CallBody::json(body)?);
        Ok(self)
    }

    /// Sets a form-urlencoded request body.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized as form data.
    pub fn form<T: Serialize>(mut self, body: &T) -> Result<Self, ApiClientError> {
        self.body = Some(CallBody::form(body)?);
        Ok(self)
    }

    /// Sets a multipart request body.
    #[must_use]
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = Some(CallBody::multipart(form));
        self
    }

    /// Applies per-call overrides to this call.
    ///
    /// Populated override fields supersede the call's current configuration:
    /// the base URI and authentication are replaced, extra headers are merged
    /// in (winning on collision), and the timeout is set. `None` leaves the
    /// call untouched, so facades can forward their optional overrides
    /// unconditionally.
    #[must_use]
    pub fn with_options(mut self, options: Option<RequestOptions>) -> Self {
        let Some(options) = options else {
            return self;
        };

        if let Some(base_uri) = options.base_uri {
            self.base_uri = base_uri;
        }
        if let Some(headers) = options.headers {
            self = self.with_headers(headers);
        }
        if let Some(authentication) = options.authentication {
            self.authentication = Some(authentication);
        }
        if let Some(timeout) = options.timeout {
            self.timeout = Some(timeout);
        }
        self
    }

    /// Replaces the set of expected status codes.
    #[must_use]
    pub fn with_expected_status_codes(mut self, codes: ExpectedStatusCodes) -> Self {
        self.expected_status_codes = codes;
        self
    }

    /// Expects status codes from an inclusive range (e.g. `200..=204`).
    #[must_use]
    pub fn with_status_range_inclusive(self, range: RangeInclusive<u16>) -> Self {
        self.with_expected_status_codes(ExpectedStatusCodes::from_inclusive_range(range))
    }

    /// Expects status codes from an exclusive range (e.g. `200..300`).
    #[must_use]
    pub fn with_status_range(self, range: Range<u16>) -> Self {
        self.with_expected_status_codes(ExpectedStatusCodes::from_exclusive_range(range))
    }

    /// Adds a single status code to the expected set.
    #[must_use]
    pub fn add_expected_status(mut self, status: u16) -> Self {
        self.expected_status_codes = self.expected_status_codes.add_expected_status(status);
        self
    }
}
