//! Upload staging
//!
//! Local files are staged with their tags before being sent in one batched
//! request. Nothing here touches the network until [`UploadStaging::submit`].
//! The pending list is cleared only after a successful submit; a failed
//! submit leaves it untouched so the user can retry without re-selecting.

pub mod error;

pub use error::StagingError;

use crate::api::FileStorage;
use crate::models::FileUpload;
use crate::tags::{join_tags, normalize_tags};
use std::path::PathBuf;

/// A staged, not-yet-uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub file: PathBuf,
    pub tags: Vec<String>,
}

impl PendingUpload {
    #[must_use]
    pub const fn new(file: PathBuf) -> Self {
        Self { file, tags: Vec::new() }
    }

    /// Display name of the staged file
    #[must_use]
    pub fn name(&self) -> String {
        self.file
            .file_name()
            .map_or_else(|| self.file.display().to_string(), |n| n.to_string_lossy().into_owned())
    }

    #[must_use]
    pub fn tags_text(&self) -> String {
        join_tags(&self.tags)
    }
}

/// Ordered list of staged uploads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadStaging {
    pending: Vec<PendingUpload>,
}

impl UploadStaging {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[PendingUpload] {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Stage a batch of files with empty tags, appended in the given order
    ///
    /// Returns the number of files added.
    pub fn add<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let before = self.pending.len();
        self.pending.extend(files.into_iter().map(PendingUpload::new));
        let added = self.pending.len() - before;
        tracing::debug!(added, total = self.pending.len(), "staged files");
        added
    }

    /// Remove the entry at `index`; later entries shift down by one
    ///
    /// # Errors
    /// Returns `StagingError::OutOfRange` if there is no entry at `index`.
    pub fn remove(&mut self, index: usize) -> Result<PendingUpload, StagingError> {
        self.check(index)?;
        Ok(self.pending.remove(index))
    }

    /// Replace an entry's tags from raw comma-separated text
    ///
    /// Applied on every keystroke; there is no server baseline to compare.
    ///
    /// # Errors
    /// Returns `StagingError::OutOfRange` if there is no entry at `index`.
    pub fn set_tags(&mut self, index: usize, raw: &str) -> Result<&[String], StagingError> {
        self.check(index)?;
        let entry = &mut self.pending[index];
        entry.tags = normalize_tags(raw);
        Ok(&entry.tags)
    }

    /// Upload every staged entry in one batch
    ///
    /// Returns the number of files uploaded. On success the list is cleared;
    /// on failure it is kept unchanged.
    ///
    /// # Errors
    /// * `StagingError::Empty` if nothing is staged (no request is made)
    /// * `StagingError::Upload` if the batched request fails
    pub fn submit(&mut self, storage: &dyn FileStorage) -> Result<usize, StagingError> {
        if self.pending.is_empty() {
            return Err(StagingError::Empty);
        }

        let batch: Vec<FileUpload> = self
            .pending
            .iter()
            .map(|entry| FileUpload::new(entry.file.clone(), entry.tags.clone()))
            .collect();

        match storage.upload_files(&batch) {
            Ok(()) => {
                let count = batch.len();
                self.pending.clear();
                tracing::info!(count, "upload batch submitted");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, count = batch.len(), "upload batch failed");
                Err(e.into())
            }
        }
    }

    fn check(&self, index: usize) -> Result<(), StagingError> {
        if index < self.pending.len() {
            Ok(())
        } else {
            Err(StagingError::OutOfRange { index, len: self.pending.len() })
        }
    }
}
