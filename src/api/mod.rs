//! Remote service boundary
//!
//! The gallery and staging logic only depend on the [`FileStorage`] and
//! [`AuthApi`] traits. [`HttpClient`] implements both against the service's
//! JSON/HTTP endpoints; tests substitute in-memory mocks.

use crate::models::{Credentials, FilePatch, FileRecord, FileUpload, NewAccount};
use crate::session::{Token, TokenAccess};

pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::HttpClient;

/// File operations offered by the remote store
///
/// Implementations must be shareable across threads: reorder updates are
/// issued concurrently.
pub trait FileStorage: Send + Sync {
    /// Fetch every file of the signed-in user
    ///
    /// # Errors
    /// Returns `ApiError` on transport, status or decode failure.
    fn list_files(&self) -> Result<Vec<FileRecord>, ApiError>;

    /// Apply a partial update and return the updated record
    ///
    /// # Errors
    /// Returns `ApiError` on transport, status or decode failure.
    fn update_file(&self, id: &str, patch: &FilePatch) -> Result<FileRecord, ApiError>;

    /// Upload a batch of files with their tags in one request
    ///
    /// # Errors
    /// Returns `ApiError` if any file cannot be read or the request fails.
    fn upload_files(&self, uploads: &[FileUpload]) -> Result<(), ApiError>;
}

/// Account operations offered by the remote service
pub trait AuthApi {
    /// Register a new account
    ///
    /// # Errors
    /// Returns `ApiError` if the server rejects the request.
    fn create_user(&self, account: &NewAccount) -> Result<(), ApiError>;

    /// Exchange credentials for a session token
    ///
    /// # Errors
    /// Returns `ApiError` if the credentials are rejected.
    fn login(&self, credentials: &Credentials) -> Result<Token, ApiError>;
}

/// Log in and store the resulting token
///
/// Nothing is stored when the login fails.
///
/// # Errors
/// Returns `ApiError` if the login fails or the token cannot be persisted.
pub fn sign_in(
    auth: &dyn AuthApi,
    tokens: &dyn TokenAccess,
    credentials: &Credentials,
) -> Result<Token, ApiError> {
    let token = auth.login(credentials)?;
    tokens.set_token(token.clone())?;
    tracing::info!(email = %credentials.email, "signed in");
    Ok(token)
}

/// Drop the current session
///
/// # Errors
/// Returns `ApiError` if the persisted token cannot be removed.
pub fn sign_out(tokens: &dyn TokenAccess) -> Result<(), ApiError> {
    tokens.clear_token()?;
    tracing::info!("signed out");
    Ok(())
}
