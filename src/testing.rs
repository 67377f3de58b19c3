//! Testing utilities for mediashelf
//!
//! Provides an in-memory [`MockStorage`] standing in for the remote service,
//! record builders, a [`FakeClipboard`] and a [`RecordingWriter`] that
//! captures command output.
//!
//! Only available when compiled with `cfg(test)`.

use crate::api::{ApiError, FileStorage};
use crate::gallery::ClipboardSink;
use crate::models::{FilePatch, FileRecord, FileUpload};
use crate::output::{MessageLevel, OutputWriter};
use chrono::{TimeZone, Utc};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Build a record with the given id, display order and tags
#[must_use]
pub fn record(id: &str, order: usize, tags: &[&str]) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: format!("{id}.jpg"),
        path: format!("uploads/{id}.jpg"),
        url: format!("https://cdn.example.com/{id}.jpg"),
        mime_type: "image/jpeg".to_string(),
        size_bytes: 1024,
        uploaded_by: "tester".to_string(),
        uploaded_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap_or_default(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        is_shared: false,
        shared_link: format!("share-{id}"),
        view_count: 0,
        order,
    }
}

/// A request received by [`MockStorage`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Update { id: String, patch: FilePatch },
    Upload(Vec<FileUpload>),
}

/// In-memory file store with scripted failures
///
/// Updates are applied to the held records so responses echo the server's
/// view. Every call is logged, including failing ones.
#[derive(Debug, Default)]
pub struct MockStorage {
    records: Mutex<HashMap<String, FileRecord>>,
    listing: Vec<String>,
    requests: Mutex<Vec<Request>>,
    fail_list: bool,
    upload_failures: Mutex<usize>,
    fail_updates: HashSet<String>,
    expired: bool,
}

impl MockStorage {
    /// Create a store serving `records` in the given listing order
    #[must_use]
    pub fn new(records: Vec<FileRecord>) -> Self {
        let listing = records.iter().map(|r| r.id.clone()).collect();
        let records = records.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self { records: Mutex::new(records), listing, ..Self::default() }
    }

    /// Make `list_files` fail
    #[must_use]
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make every `upload_files` call fail
    #[must_use]
    pub fn failing_upload(self) -> Self {
        self.failing_uploads(usize::MAX)
    }

    /// Make the next `count` calls to `upload_files` fail
    #[must_use]
    pub fn failing_uploads(mut self, count: usize) -> Self {
        self.upload_failures = Mutex::new(count);
        self
    }

    /// Make updates of `id` fail
    #[must_use]
    pub fn failing_update(mut self, id: &str) -> Self {
        self.fail_updates.insert(id.to_string());
        self
    }

    /// Make every scripted failure a 401, as for an expired session
    #[must_use]
    pub fn expired_session(mut self) -> Self {
        self.expired = true;
        self
    }

    /// Every request received so far
    #[must_use]
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// Update requests only, sorted by id since they may arrive in any order
    #[must_use]
    pub fn updates(&self) -> Vec<(String, FilePatch)> {
        let mut updates: Vec<_> = self
            .requests()
            .into_iter()
            .filter_map(|request| match request {
                Request::Update { id, patch } => Some((id, patch)),
                _ => None,
            })
            .collect();
        updates.sort_by(|a, b| a.0.cmp(&b.0));
        updates
    }

    /// Current server-side copy of a record
    #[must_use]
    pub fn stored(&self, id: &str) -> Option<FileRecord> {
        self.records.lock().unwrap().get(id).cloned()
    }

    fn log(&self, request: Request) {
        self.requests.lock().unwrap().push(request);
    }

    fn failure(&self) -> ApiError {
        if self.expired {
            ApiError::Status { status: 401, body: "token expired".to_string() }
        } else {
            ApiError::Status { status: 503, body: "service unavailable".to_string() }
        }
    }
}

impl FileStorage for MockStorage {
    fn list_files(&self) -> Result<Vec<FileRecord>, ApiError> {
        self.log(Request::List);
        if self.fail_list {
            return Err(self.failure());
        }
        let records = self.records.lock().unwrap();
        Ok(self.listing.iter().filter_map(|id| records.get(id).cloned()).collect())
    }

    fn update_file(&self, id: &str, patch: &FilePatch) -> Result<FileRecord, ApiError> {
        self.log(Request::Update { id: id.to_string(), patch: patch.clone() });
        if self.fail_updates.contains(id) {
            return Err(self.failure());
        }
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(id)
            .ok_or_else(|| ApiError::Status { status: 404, body: format!("no file {id}") })?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    fn upload_files(&self, uploads: &[FileUpload]) -> Result<(), ApiError> {
        self.log(Request::Upload(uploads.to_vec()));
        let mut remaining = self.upload_failures.lock().unwrap();
        if *remaining > 0 {
            *remaining = remaining.saturating_sub(1);
            return Err(self.failure());
        }
        Ok(())
    }
}

/// Clipboard that remembers what was copied, or always fails
#[derive(Debug, Default)]
pub struct FakeClipboard {
    pub copied: Vec<String>,
    broken: bool,
}

impl FakeClipboard {
    /// A clipboard whose every copy fails
    #[must_use]
    pub fn broken() -> Self {
        Self { copied: Vec::new(), broken: true }
    }
}

impl ClipboardSink for FakeClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        if self.broken {
            return Err("no display".to_string());
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

/// Output writer that records every line with its level
///
/// Plain `write` output is recorded at [`MessageLevel::Info`].
#[derive(Debug, Default)]
pub struct RecordingWriter {
    lines: RefCell<Vec<(MessageLevel, String)>>,
}

impl RecordingWriter {
    #[must_use]
    pub fn lines(&self) -> Vec<(MessageLevel, String)> {
        self.lines.borrow().clone()
    }

    /// Messages recorded at `level`
    #[must_use]
    pub fn at(&self, level: MessageLevel) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}

impl OutputWriter for RecordingWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_lists_in_given_order() {
        let storage = MockStorage::new(vec![record("b", 1, &[]), record("a", 0, &[])]);
        let ids: Vec<_> = storage.list_files().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_mock_applies_updates() {
        let storage = MockStorage::new(vec![record("a", 0, &["x"])]);
        let updated = storage.update_file("a", &FilePatch::order(4)).unwrap();
        assert_eq!(updated.order, 4);
        assert_eq!(storage.stored("a").unwrap().order, 4);
    }

    #[test]
    fn test_mock_scripted_failures_are_logged() {
        let storage = MockStorage::new(vec![record("a", 0, &[])])
            .failing_list()
            .failing_update("a");
        assert!(storage.list_files().is_err());
        assert!(storage.update_file("a", &FilePatch::order(1)).is_err());
        assert_eq!(storage.requests().len(), 2);
        assert_eq!(storage.stored("a").unwrap().order, 0);
    }

    #[test]
    fn test_fake_clipboard() {
        let mut clipboard = FakeClipboard::default();
        clipboard.copy_text("x").unwrap();
        assert_eq!(clipboard.copied, vec!["x"]);
        assert!(FakeClipboard::broken().copy_text("x").is_err());
    }
}
