//! Error types for results processing.
//!
//! Endpoint-level failures (network, HTTP status, body decode) are the only
//! errors a caller ever sees: the pipeline collapses them into a single
//! human-readable message in its `Error` state. Row-level problems (a record
//! whose total time does not parse or is out of range) never surface as
//! errors at all; such records are dropped before sorting.
//!
//! ## Helper Constructors
//!
//! Use helper methods for common error scenarios:
//!
//! ```rust
//! use finishline::ResultsError;
//!
//! let fetch_error = ResultsError::fetch_failed("connection refused");
//! let status_error = ResultsError::status(500);
//! let decode_error = ResultsError::decode_failed("expected a JSON array");
//! assert!(!status_error.to_string().is_empty());
//! ```

use thiserror::Error;

/// Result type alias for results-processing operations.
pub type Result<T, E = ResultsError> = std::result::Result<T, E>;

/// Main error type for results-processing operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ResultsError {
    #[error("Failed to fetch results: {reason}")]
    Fetch {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Results endpoint returned HTTP {code}")]
    Status { code: u16 },

    #[error("Failed to decode results: {details}")]
    Decode {
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid time string '{input}': {details}")]
    Time { input: String, details: String },
}

impl ResultsError {
    /// Helper constructor for fetch failures.
    pub fn fetch_failed(reason: impl Into<String>) -> Self {
        ResultsError::Fetch { reason: reason.into(), source: None }
    }

    /// Helper constructor for fetch failures with an underlying cause.
    pub fn fetch_failed_with_source(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        ResultsError::Fetch { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for non-success HTTP status responses.
    pub fn status(code: u16) -> Self {
        ResultsError::Status { code }
    }

    /// Helper constructor for body-decode failures.
    pub fn decode_failed(details: impl Into<String>) -> Self {
        ResultsError::Decode { details: details.into(), source: None }
    }

    /// Helper constructor for time-string parse failures.
    pub fn time_parse(input: impl Into<String>, details: impl Into<String>) -> Self {
        ResultsError::Time { input: input.into(), details: details.into() }
    }

    /// Returns whether this error represents an endpoint-level failure.
    ///
    /// Endpoint-level failures are fatal to the whole display; anything else
    /// only ever affects individual records.
    pub fn is_endpoint_failure(&self) -> bool {
        match self {
            ResultsError::Fetch { .. } => true,
            ResultsError::Status { .. } => true,
            ResultsError::Decode { .. } => true,
            ResultsError::Time { .. } => false,
        }
    }
}

impl From<reqwest::Error> for ResultsError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ResultsError::Status { code: status.as_u16() };
        }
        let details = err.to_string();
        if err.is_decode() {
            ResultsError::Decode { details, source: Some(Box::new(err)) }
        } else {
            ResultsError::Fetch { reason: details, source: Some(Box::new(err)) }
        }
    }
}

impl From<serde_json::Error> for ResultsError {
    fn from(err: serde_json::Error) -> Self {
        ResultsError::Decode { details: err.to_string(), source: Some(Box::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
          #[test]
          fn error_messages_contain_their_context(
            reason in "[a-zA-Z0-9 .-]{0,40}",
            code in 100u16..600u16,
            input in "[0-9:]{1,12}",
            details in "[a-z ]{1,30}"
          ) {
            let fetch = ResultsError::fetch_failed(reason.clone());
            prop_assert!(fetch.to_string().contains(&reason));

            let status = ResultsError::status(code);
            prop_assert!(status.to_string().contains(&code.to_string()));

            let time = ResultsError::time_parse(input.clone(), details.clone());
            let msg = time.to_string();
            prop_assert!(msg.contains(&input));
            prop_assert!(msg.contains(&details));
          }

          #[test]
          fn endpoint_classification_is_stable(reason in "[a-z ]{1,30}", code in 100u16..600u16) {
            prop_assert!(ResultsError::fetch_failed(reason.clone()).is_endpoint_failure());
            prop_assert!(ResultsError::status(code).is_endpoint_failure());
            prop_assert!(ResultsError::decode_failed(reason.clone()).is_endpoint_failure());
            prop_assert!(!ResultsError::time_parse(reason, "bad").is_endpoint_failure());
          }
        }
    }

    #[test]
    fn error_constructors_validation() {
        let fetch = ResultsError::fetch_failed("test");
        assert!(matches!(fetch, ResultsError::Fetch { .. }));

        let status = ResultsError::status(404);
        assert!(matches!(status, ResultsError::Status { code: 404 }));

        let decode = ResultsError::decode_failed("test");
        assert!(matches!(decode, ResultsError::Decode { .. }));

        let io_err = std::io::Error::other("socket closed");
        let chained = ResultsError::fetch_failed_with_source("request failed", Box::new(io_err));
        let source = std::error::Error::source(&chained).unwrap();
        assert_eq!(source.to_string(), "socket closed");
    }

    #[test]
    fn error_traits_validation() {
        // Compile-time check: ResultsError must be Send + Sync + 'static
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<ResultsError>();

        let error = ResultsError::fetch_failed("test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn json_conversion_maps_to_decode() {
        let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let converted: ResultsError = err.into();
        assert!(matches!(converted, ResultsError::Decode { .. }));
    }
}
