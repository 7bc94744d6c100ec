//! Client error types

use http::StatusCode;
use thiserror::Error;

/// Client error type
///
/// Failures are passed through as they happen: a non-success response
/// keeps its status and body untouched.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Response status, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Whether the server reported the resource as missing (404)
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Response body of a status error
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_accessors() {
        let err = ClientError::Status {
            status: StatusCode::NOT_FOUND,
            body: "sala 9 no existe".into(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.body(), Some("sala 9 no existe"));
        assert_eq!(err.to_string(), "HTTP 404 Not Found: sala 9 no existe");
    }

    #[test]
    fn test_non_status_errors() {
        let err = ClientError::InvalidResponse("empty body".into());
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
        assert_eq!(err.body(), None);
    }
}
