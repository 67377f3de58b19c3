//! Errors raised while talking to the remote file-storage service

use thiserror::Error;

/// Remote API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A local file could not be read for upload
    #[error("Could not read file: {0}")]
    Io(#[from] std::io::Error),

    /// Protected call without a session
    #[error(transparent)]
    Session(#[from] crate::session::SessionError),

    /// Configured base URL is not usable
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Whether the server rejected the credential
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
            || matches!(self, Self::Session(crate::session::SessionError::NotSignedIn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionError;

    #[test]
    fn test_status_error_display() {
        let error = ApiError::Status { status: 500, body: "boom".to_string() };
        assert_eq!(error.to_string(), "Server responded with 500: boom");
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::Status { status: 401, body: String::new() }.is_unauthorized());
        assert!(ApiError::Status { status: 403, body: String::new() }.is_unauthorized());
        assert!(ApiError::from(SessionError::NotSignedIn).is_unauthorized());
        assert!(!ApiError::Status { status: 404, body: String::new() }.is_unauthorized());
        assert!(!ApiError::InvalidUrl("x".into()).is_unauthorized());
    }

    #[test]
    fn test_session_error_is_transparent() {
        let error = ApiError::from(SessionError::NotSignedIn);
        assert_eq!(error.to_string(), SessionError::NotSignedIn.to_string());
    }
}
