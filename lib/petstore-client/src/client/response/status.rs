use std::ops::{Range, RangeInclusive};

/// Expected status codes for HTTP requests.
///
/// Supports multiple ranges and individual status codes for flexible
/// validation. The default accepts the success range `200..300`; anything
/// outside the expected set makes the call fail with
/// [`ApiClientError::UnexpectedStatusCode`](crate::ApiClientError::UnexpectedStatusCode).
#[derive(Debug, Clone)]
pub struct ExpectedStatusCodes {
    ranges: Vec<StatusCodeRange>,
}

/// Represents a range of status codes (inclusive or exclusive).
#[derive(Debug, Clone)]
enum StatusCodeRange {
    Single(u16),
    Inclusive(RangeInclusive<u16>),
    Exclusive(Range<u16>),
}

impl ExpectedStatusCodes {
    /// Creates a new set of expected status codes with the default range (200..300).
    pub fn new() -> Self {
        Self {
            ranges: vec![StatusCodeRange::Exclusive(200..300)],
        }
    }

    /// Creates expected status codes from a single status code.
    ///
    /// # Panics
    ///
    /// Panics if the status code is invalid (outside 100-599).
    pub fn from_single(status: u16) -> Self {
        assert!(
            (100..=599).contains(&status),
            "HTTP status code must be between 100 and 599, got {status}"
        );

        Self {
            ranges: vec![StatusCodeRange::Single(status)],
        }
    }

    /// Creates expected status codes from a single inclusive range.
    ///
    /// # Panics
    ///
    /// Panics if the range contains invalid HTTP status codes (outside 100-599).
    pub fn from_inclusive_range(range: RangeInclusive<u16>) -> Self {
        assert!(
            *range.start() >= 100 && *range.start() <= 599,
            "HTTP status code range start must be between 100 and 599, got {}",
            range.start()
        );
        assert!(
            *range.end() >= 100 && *range.end() <= 599,
            "HTTP status code range end must be between 100 and 599, got {}",
            range.end()
        );
        assert!(
            range.start() <= range.end(),
            "HTTP status code range start ({}) must be less than or equal to end ({})",
            range.start(),
            range.end()
        );

        Self {
            ranges: vec![StatusCodeRange::Inclusive(range)],
        }
    }

    /// Creates expected status codes from a single exclusive range.
    ///
    /// # Panics
    ///
    /// Panics if the range contains invalid HTTP status codes (outside 100-599).
    pub fn from_exclusive_range(range: Range<u16>) -> Self {
        assert!(
            range.start >= 100 && range.start <= 599,
            "HTTP status code range start must be between 100 and 599, got {}",
            range.start
        );
        assert!(
            range.end >= 100 && range.end <= 600, // exclusive end can be 600
            "HTTP status code range end must be between 100 and 600 (exclusive), got {}",
            range.end
        );
        assert!(
            range.start < range.end,
            "HTTP status code range start ({}) must be less than end ({})",
            range.start,
            range.end
        );

        Self {
            ranges: vec![StatusCodeRange::Exclusive(range)],
        }
    }

    /// Adds a single status code to the existing set (for chaining).
    ///
    /// # Panics
    ///
    /// Panics if the status code is invalid (outside 100-599).
    #[must_use]
    pub fn add_expected_status(mut self, status: u16) -> Self {
        assert!(
            (100..=599).contains(&status),
            "HTTP status code must be between 100 and 599, got {status}"
        );
        self.ranges.push(StatusCodeRange::Single(status));
        self
    }

    /// Adds an inclusive range to the existing set (for chaining).
    ///
    /// # Panics
    ///
    /// Panics if the range contains invalid HTTP status codes (outside 100-599).
    #[must_use]
    pub fn add_expected_range(mut self, range: RangeInclusive<u16>) -> Self {
        assert!(
            *range.start() >= 100 && *range.start() <= 599,
            "HTTP status code range start must be between 100 and 599, got {}",
            range.start()
        );
        assert!(
            *range.end() >= 100 && *range.end() <= 599,
            "HTTP status code range end must be between 100 and 599, got {}",
            range.end()
        );

        self.ranges.push(StatusCodeRange::Inclusive(range));
        self
    }

    /// Checks if a status code is expected/valid.
    pub fn contains(&self, status: u16) -> bool {
        self.ranges.iter().any(|range| match range {
            StatusCodeRange::Single(single) => *single == status,
            StatusCodeRange::Inclusive(range) => range.contains(&status),
            StatusCodeRange::Exclusive(range) => range.contains(&status),
        })
    }

    /// Checks if an `http::StatusCode` is expected/valid.
    pub fn contains_status_code(&self, status: http::StatusCode) -> bool {
        self.contains(status.as_u16())
    }
}

impl Default for ExpectedStatusCodes {
    fn default() -> Self {
        Self::new()
    }
}
