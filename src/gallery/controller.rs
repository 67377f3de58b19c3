//! Gallery controller
//!
//! Owns the displayed [`Gallery`] snapshot and every file's [`TagEdit`]
//! state, and reconciles them with a [`FileStorage`]. Each operation returns
//! a plain outcome value describing what happened and records a [`Notice`]
//! for the user; none of them fail the caller.
//!
//! # Workflow
//!
//! ```text
//! load() ──> Gallery (sorted by order) + Confirmed(tags) per file
//!   │
//!   ├─ input_tags(id, raw) ──> Editing
//!   │     └─ commit_tags(id) ──> Unchanged | Saved | Failed
//!   ├─ reorder(source, target) ──> local swap, then order updates
//!   ├─ set_shared / record_view ──> patch, replace record
//!   └─ copy_share_link(id) ──> clipboard
//! ```

use super::edit::{CommitPlan, TagEdit};
use super::share::{ClipboardSink, share_link};
use super::snapshot::{Gallery, OrderMove};
use crate::api::{ApiError, FileStorage};
use crate::models::{FilePatch, FileRecord};
use crate::output::{Notice, NoticeBoard};
use rayon::prelude::*;
use std::collections::HashMap;

/// Shown after a request is rejected for lack of a valid session
pub const SIGN_IN_HINT: &str = "Your session is no longer valid. Run 'mediashelf login' to sign in again";

/// Result of loading the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Failed(String),
}

/// Result of committing a tag edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagCommit {
    /// File is unknown to the gallery
    UnknownFile,
    /// No edit in progress
    NoDraft,
    /// Normalized draft equals the confirmed tags; nothing sent
    Unchanged,
    /// Server accepted the new tags
    Saved(Vec<String>),
    /// Server rejected the update; the draft is kept for a retry
    Failed(String),
}

/// Order update that the server rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFailure {
    pub id: String,
    pub order: usize,
    pub error: String,
}

/// Result of a drag-style reorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Same file, or a missing/unknown id; nothing changed
    Ignored,
    /// Local order changed; lists the order updates issued
    Applied {
        sent: Vec<OrderMove>,
        failed: Vec<OrderFailure>,
    },
}

/// Result of a single-record update (sharing, views)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordUpdate {
    UnknownFile,
    Updated(FileRecord),
    Failed(String),
}

/// Result of copying a share link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    UnknownFile,
    Copied(String),
    Failed(String),
}

/// Client-side owner of the gallery state
pub struct GalleryController<S: FileStorage> {
    storage: S,
    share_base: String,
    gallery: Gallery,
    edits: HashMap<String, TagEdit>,
    notices: NoticeBoard,
}

impl<S: FileStorage> GalleryController<S> {
    /// Create an empty controller; call [`load`](Self::load) to populate it
    ///
    /// `share_base` is the base URL share links are built on.
    pub fn new(storage: S, share_base: impl Into<String>) -> Self {
        Self {
            storage,
            share_base: share_base.into(),
            gallery: Gallery::default(),
            edits: HashMap::new(),
            notices: NoticeBoard::default(),
        }
    }

    #[must_use]
    pub const fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Tag editing state of a file
    #[must_use]
    pub fn edit_state(&self, id: &str) -> Option<&TagEdit> {
        self.edits.get(id)
    }

    /// Text to show in a file's tag field
    #[must_use]
    pub fn tags_text(&self, id: &str) -> Option<String> {
        self.edits.get(id).map(TagEdit::display_text)
    }

    /// Take every pending notice, oldest first
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Fetch all files and make them the authoritative list
    ///
    /// On failure the gallery is left empty; there is no retry.
    pub fn load(&mut self) -> LoadOutcome {
        match self.storage.list_files() {
            Ok(files) => {
                self.edits = files
                    .iter()
                    .map(|file| (file.id.clone(), TagEdit::Confirmed(file.tags.clone())))
                    .collect();
                self.gallery = Gallery::from_records(files);
                tracing::info!(count = self.gallery.len(), "gallery loaded");
                LoadOutcome::Loaded(self.gallery.len())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load gallery");
                self.gallery = Gallery::default();
                self.edits.clear();
                self.notices.push(Notice::error(format!("Failed to load files: {e}")));
                self.hint_sign_in(&e);
                LoadOutcome::Failed(e.to_string())
            }
        }
    }

    /// Record typed tag text for a file, entering the editing state
    ///
    /// Returns `false` if the file is unknown.
    pub fn input_tags(&mut self, id: &str, raw: &str) -> bool {
        match self.edits.remove(id) {
            Some(edit) => {
                self.edits.insert(id.to_string(), edit.input(raw));
                true
            }
            None => false,
        }
    }

    /// Commit a file's draft (the field lost focus)
    ///
    /// Sends an update only if the normalized draft differs from the
    /// confirmed tags. On failure the confirmed tags stay displayed in the
    /// gallery and the draft is kept so the user can retry.
    pub fn commit_tags(&mut self, id: &str) -> TagCommit {
        let Some(edit) = self.edits.get(id) else {
            return TagCommit::UnknownFile;
        };

        let tags = match edit.plan_commit() {
            CommitPlan::NoDraft => return TagCommit::NoDraft,
            CommitPlan::Unchanged => {
                let confirmed = edit.confirmed().to_vec();
                self.edits.insert(id.to_string(), TagEdit::Confirmed(confirmed));
                return TagCommit::Unchanged;
            }
            CommitPlan::Send(tags) => tags,
        };

        match self.storage.update_file(id, &FilePatch::tags(tags.clone())) {
            Ok(_) => {
                self.gallery = self.gallery.with_tags(id, &tags);
                self.edits.insert(id.to_string(), TagEdit::Confirmed(tags.clone()));
                tracing::info!(id, ?tags, "tags saved");
                self.notices.push(Notice::success("Tags updated"));
                TagCommit::Saved(tags)
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "tag update failed");
                self.notices.push(Notice::error(format!("Failed to update tags: {e}")));
                self.hint_sign_in(&e);
                TagCommit::Failed(e.to_string())
            }
        }
    }

    /// Swap two files and persist every changed position
    ///
    /// The swap is applied locally first and kept regardless of how the
    /// order updates fare; they are sent concurrently and independently.
    pub fn reorder(&mut self, source: &str, target: &str) -> ReorderOutcome {
        let Some(plan) = self.gallery.plan_swap(source, target) else {
            tracing::debug!(source, target, "reorder ignored");
            return ReorderOutcome::Ignored;
        };
        self.gallery = plan.gallery;

        let storage = &self.storage;
        let results: Vec<(&OrderMove, Result<FileRecord, ApiError>)> = plan
            .moves
            .par_iter()
            .map(|step| (step, storage.update_file(&step.id, &FilePatch::order(step.order))))
            .collect();

        let mut unauthorized = None;
        let failed: Vec<OrderFailure> = results
            .into_iter()
            .filter_map(|(step, result)| {
                result.err().map(|e| {
                    tracing::warn!(id = %step.id, order = step.order, error = %e, "order update failed");
                    let failure =
                        OrderFailure { id: step.id.clone(), order: step.order, error: e.to_string() };
                    if e.is_unauthorized() {
                        unauthorized = Some(e);
                    }
                    failure
                })
            })
            .collect();

        tracing::info!(source, target, sent = plan.moves.len(), failed = failed.len(), "files swapped");
        if failed.is_empty() {
            self.notices.push(Notice::success("File arrangement updated"));
        } else {
            self.notices.push(Notice::error(format!(
                "Failed to save the position of {} file(s); reload to resync",
                failed.len()
            )));
        }
        if let Some(e) = unauthorized {
            self.hint_sign_in(&e);
        }

        ReorderOutcome::Applied { sent: plan.moves, failed }
    }

    /// Toggle public sharing of a file
    pub fn set_shared(&mut self, id: &str, shared: bool) -> RecordUpdate {
        let outcome = self.patch_record(id, &FilePatch::shared(shared), "Failed to change sharing");
        match &outcome {
            RecordUpdate::Updated(_) if shared => self.notices.push(Notice::success("File is now shared")),
            RecordUpdate::Updated(_) => self.notices.push(Notice::success("File is no longer shared")),
            RecordUpdate::Failed(_) | RecordUpdate::UnknownFile => {}
        }
        outcome
    }

    /// Count one more view of a file
    pub fn record_view(&mut self, id: &str) -> RecordUpdate {
        let Some(views) = self.gallery.get(id).map(|file| file.view_count + 1) else {
            return RecordUpdate::UnknownFile;
        };
        self.patch_record(id, &FilePatch::views(views), "Failed to record view")
    }

    fn patch_record(&mut self, id: &str, patch: &FilePatch, failure: &str) -> RecordUpdate {
        if self.gallery.get(id).is_none() {
            return RecordUpdate::UnknownFile;
        }

        match self.storage.update_file(id, patch) {
            Ok(record) => {
                // keep the local display position; the server echo may lag a reorder
                let mut record = record;
                if let Some(local) = self.gallery.get(id) {
                    record.order = local.order;
                }
                let idle = self.edits.get(id).is_some_and(|edit| !edit.is_editing());
                if idle {
                    self.edits.insert(id.to_string(), TagEdit::Confirmed(record.tags.clone()));
                }
                self.gallery = self.gallery.with_record(record.clone());
                RecordUpdate::Updated(record)
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "file update failed");
                self.notices.push(Notice::error(format!("{failure}: {e}")));
                self.hint_sign_in(&e);
                RecordUpdate::Failed(e.to_string())
            }
        }
    }

    /// Point the user at sign-in when the server rejected the session
    fn hint_sign_in(&mut self, error: &ApiError) {
        if error.is_unauthorized() {
            self.notices.push(Notice::warning(SIGN_IN_HINT));
        }
    }

    /// Share link of a file, without copying it
    #[must_use]
    pub fn share_link(&self, id: &str) -> Option<String> {
        self.gallery
            .get(id)
            .map(|file| share_link(&self.share_base, &file.shared_link))
    }

    /// Copy a file's share link to the clipboard
    ///
    /// Failure is reported but never touches the gallery.
    pub fn copy_share_link(&mut self, id: &str, clipboard: &mut dyn ClipboardSink) -> ShareOutcome {
        let Some(link) = self.share_link(id) else {
            return ShareOutcome::UnknownFile;
        };

        match clipboard.copy_text(&link) {
            Ok(()) => {
                self.notices.push(Notice::success("Link copied to clipboard"));
                ShareOutcome::Copied(link)
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "clipboard copy failed");
                self.notices.push(Notice::error(format!("Failed to copy link: {e}")));
                ShareOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
