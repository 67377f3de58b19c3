//! Session-specific error types
//!
//! # Error Types
//!
//! - **`Storage`**: Errors from the underlying sled store holding the token
//! - **`Serialization`**: The persisted token could not be encoded or decoded
//! - **`NotSignedIn`**: A protected operation was attempted without a token

use thiserror::Error;

/// Session token errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Represents a sled database error
    #[error("Token store error: {0}")]
    Storage(#[from] sled::Error),

    /// Persisted token is not valid JSON
    #[error("Error while encoding token: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No session token is present
    #[error("Not signed in. Run 'mediashelf login' first")]
    NotSignedIn,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
