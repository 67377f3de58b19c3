//! HTTP binding of the remote file-storage service
//!
//! Endpoints:
//!
//! ```text
//! GET  /files               -> {"files": [...]}
//! PUT  /files/update/{id}   -> {"file": {...}}
//! POST /files/upload        multipart: files + tags (JSON array) per entry
//! POST /users/create
//! POST /users/login         -> {"token": "..."}
//! ```
//!
//! Every request except account creation and login carries the session token
//! as a bearer credential when one is present.

use super::{ApiError, AuthApi, FileStorage};
use crate::models::{
    Credentials, FileListResponse, FilePatch, FileRecord, FileUpdateResponse, FileUpload,
    LoginResponse, NewAccount,
};
use crate::session::{Token, TokenAccess};
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder, multipart};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Blocking HTTP client for the media service
pub struct HttpClient {
    base: String,
    client: Client,
    tokens: Arc<dyn TokenAccess>,
}

impl HttpClient {
    /// Build a client for `base_url`
    ///
    /// A `timeout` of `None` leaves request timing to the transport defaults.
    ///
    /// # Errors
    /// Returns `ApiError::InvalidUrl` if `base_url` does not parse, or
    /// `ApiError::Transport` if the underlying client cannot be built.
    pub fn new(
        base_url: &str,
        timeout: Option<Duration>,
        tokens: Arc<dyn TokenAccess>,
    ) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            tokens,
        })
    }

    /// Base URL requests are made against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// URL of one file, with `id` encoded as a single path segment
    fn file_endpoint(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint("files/update")?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{}: cannot hold a path", self.base)))?
            .push(id);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get_token() {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    fn send(request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if status.is_success() {
            Ok(body)
        } else {
            tracing::warn!(status = status.as_u16(), "request rejected");
            Err(ApiError::Status { status: status.as_u16(), body })
        }
    }

    fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let body = Self::send(request)?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl FileStorage for HttpClient {
    fn list_files(&self) -> Result<Vec<FileRecord>, ApiError> {
        let url = self.endpoint("files")?;
        tracing::debug!(%url, "listing files");

        let response: FileListResponse = Self::send_json(self.authorized(self.client.get(url)))?;
        Ok(response.files)
    }

    fn update_file(&self, id: &str, patch: &FilePatch) -> Result<FileRecord, ApiError> {
        let url = self.file_endpoint(id)?;
        tracing::debug!(%url, ?patch, "updating file");

        let request = self.authorized(self.client.put(url)).json(patch);
        let response: FileUpdateResponse = Self::send_json(request)?;
        Ok(response.file)
    }

    fn upload_files(&self, uploads: &[FileUpload]) -> Result<(), ApiError> {
        let url = self.endpoint("files/upload")?;
        tracing::debug!(%url, count = uploads.len(), "uploading batch");

        let mut form = multipart::Form::new();
        for upload in uploads {
            form = form
                .file("files", upload.file())?
                .text("tags", serde_json::to_string(&upload.tags)?);
        }

        Self::send(self.authorized(self.client.post(url)).multipart(form))?;
        Ok(())
    }
}

impl AuthApi for HttpClient {
    fn create_user(&self, account: &NewAccount) -> Result<(), ApiError> {
        let url = self.endpoint("users/create")?;
        tracing::debug!(%url, email = %account.email, "creating account");

        Self::send(self.client.post(url).json(account))?;
        Ok(())
    }

    fn login(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        let url = self.endpoint("users/login")?;
        tracing::debug!(%url, email = %credentials.email, "logging in");

        let response: LoginResponse = Self::send_json(self.client.post(url).json(credentials))?;
        Ok(Token::new(response.token))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
