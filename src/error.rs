//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
///
/// Every failed attempt of the request executor is classified into one of
/// these. The envelope-returning `get` collapses them to a generic
/// description; `try_get` hands them back as-is.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Timeout")]
    Timeout,

    #[error("Bridge returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid resource URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded {
        attempts: u32,
        last_error: Box<HttpError>,
    },
}

impl HttpError {
    /// Sort a transport error into the timeout/decode/transport buckets.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if err.is_decode() {
            HttpError::Decode(err.to_string())
        } else {
            HttpError::Transport(err)
        }
    }

    /// Whether a later attempt could plausibly succeed.
    ///
    /// Client errors other than 408 and 429, undecodable bodies and malformed
    /// URLs will fail the same way every time.
    pub fn is_transient(&self) -> bool {
        match self {
            HttpError::Timeout | HttpError::Transport(_) => true,
            HttpError::Status { status, .. } => {
                matches!(status, 408 | 429) || *status >= 500
            }
            HttpError::Decode(_) | HttpError::InvalidUrl(_) | HttpError::Build(_) => false,
            HttpError::MaxRetriesExceeded { last_error, .. } => last_error.is_transient(),
        }
    }

    /// HTTP status code, if the bridge answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::MaxRetriesExceeded { last_error, .. } => last_error.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_not_transient() {
        for status in [400, 401, 403, 404] {
            let err = HttpError::Status {
                status,
                body: String::new(),
            };
            assert!(!err.is_transient(), "{status} should not be transient");
        }
    }

    #[test]
    fn test_server_and_throttle_errors_are_transient() {
        for status in [408, 429, 500, 502, 503, 504] {
            let err = HttpError::Status {
                status,
                body: String::new(),
            };
            assert!(err.is_transient(), "{status} should be transient");
        }
        assert!(HttpError::Timeout.is_transient());
        assert!(!HttpError::Decode("eof".into()).is_transient());
        assert!(!HttpError::InvalidUrl("bad".into()).is_transient());
    }

    #[test]
    fn test_max_retries_exceeded_keeps_cause() {
        let err = HttpError::MaxRetriesExceeded {
            attempts: 4,
            last_error: Box::new(HttpError::Status {
                status: 401,
                body: "unauthorized user".into(),
            }),
        };
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_transient());
        let msg = err.to_string();
        assert!(msg.contains("4 attempts"));
        assert!(msg.contains("unauthorized user"));
    }
}
