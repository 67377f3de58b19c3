//! Upload staging errors

use crate::api::ApiError;
use thiserror::Error;

/// Errors that can occur while staging or submitting uploads
#[derive(Debug, Error)]
pub enum StagingError {
    /// Submit was requested with nothing staged
    #[error("No files to upload")]
    Empty,

    /// Position does not name a staged entry
    #[error("No staged file at position {index} (have {len})")]
    OutOfRange { index: usize, len: usize },

    /// The batched upload request failed; staged entries are kept
    #[error("Upload failed: {0}")]
    Upload(#[from] ApiError),
}
