//! Error types for the mediatype crate.

use thiserror::Error;

/// The main error type for the mediatype crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not have the `type/subtype` shape.
    #[error("malformed media type: {0}")]
    MalformedMediaType(String),

    /// A parameter clause could not be tokenized or decoded.
    #[error("malformed parameter: {0}")]
    MalformedParameter(String),
}

/// Specialized Result type for mediatype operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn media_type(reason: impl Into<String>) -> Self {
        Error::MalformedMediaType(reason.into())
    }

    pub(crate) fn parameter(reason: impl Into<String>) -> Self {
        Error::MalformedParameter(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MalformedMediaType("no media type".to_string());
        assert_eq!(err.to_string(), "malformed media type: no media type");

        let err = Error::MalformedParameter("unterminated quoted string".to_string());
        assert_eq!(
            err.to_string(),
            "malformed parameter: unterminated quoted string"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert_eq!(
            Error::media_type("expected slash"),
            Error::MalformedMediaType("expected slash".to_string())
        );
        assert!(matches!(
            Error::parameter("missing '='"),
            Error::MalformedParameter(_)
        ));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Error>();
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(Error::media_type("empty"));
        assert!(err_result.is_err());
    }
}
