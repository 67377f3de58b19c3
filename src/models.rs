//! Wire and domain types shared by the gallery, staging and API layers
//!
//! Field names follow the remote service's JSON (camelCase, `_id`, `type`,
//! `size`, `views`); the Rust side uses descriptive names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Metadata for one uploaded media asset, as held by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Server-assigned unique identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Original file name
    pub name: String,

    /// Storage path on the server (informational)
    #[serde(default)]
    pub path: String,

    /// Public URL of the media
    pub url: String,

    /// MIME type reported at upload
    #[serde(rename = "type")]
    pub mime_type: String,

    /// Size of the stored file in bytes
    #[serde(rename = "size")]
    pub size_bytes: u64,

    /// Identifier of the uploading user
    #[serde(default)]
    pub uploaded_by: String,

    /// Upload timestamp
    pub uploaded_at: DateTime<Utc>,

    /// Tags in display order; the server does not deduplicate
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether the file is publicly shared
    #[serde(default)]
    pub is_shared: bool,

    /// Opaque share token, possibly empty
    #[serde(default)]
    pub shared_link: String,

    /// Number of recorded views
    #[serde(rename = "views", default)]
    pub view_count: u64,

    /// Display position within the gallery
    #[serde(default)]
    pub order: usize,
}

impl FileRecord {
    /// Classify the record by its MIME type
    #[must_use]
    pub fn media_kind(&self) -> MediaKind {
        MediaKind::from_mime(&self.mime_type)
    }
}

/// Broad media category used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image") {
            Self::Image
        } else if mime.starts_with("video") {
            Self::Video
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Other => "file",
        }
    }
}

/// Partial update for a file; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shared: Option<bool>,

    #[serde(rename = "views", skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
}

impl FilePatch {
    #[must_use]
    pub fn tags(tags: Vec<String>) -> Self {
        Self { tags: Some(tags), ..Self::default() }
    }

    #[must_use]
    pub fn order(order: usize) -> Self {
        Self { order: Some(order), ..Self::default() }
    }

    #[must_use]
    pub fn shared(is_shared: bool) -> Self {
        Self { is_shared: Some(is_shared), ..Self::default() }
    }

    #[must_use]
    pub fn views(view_count: u64) -> Self {
        Self { view_count: Some(view_count), ..Self::default() }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tags.is_none()
            && self.order.is_none()
            && self.is_shared.is_none()
            && self.view_count.is_none()
    }

    /// Apply the patch to a local record, field by field
    pub fn apply_to(&self, record: &mut FileRecord) {
        if let Some(tags) = &self.tags {
            record.tags.clone_from(tags);
        }
        if let Some(order) = self.order {
            record.order = order;
        }
        if let Some(is_shared) = self.is_shared {
            record.is_shared = is_shared;
        }
        if let Some(view_count) = self.view_count {
            record.view_count = view_count;
        }
    }
}

/// One entry of a batched upload: a local file and the tags to attach
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file: PathBuf,
    pub tags: Vec<String>,
}

impl FileUpload {
    #[must_use]
    pub const fn new(file: PathBuf, tags: Vec<String>) -> Self {
        Self { file, tags }
    }

    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// Response envelope of the file listing endpoint
#[derive(Debug, Deserialize)]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

/// Response envelope of the file update endpoint
#[derive(Debug, Deserialize)]
pub struct FileUpdateResponse {
    pub file: FileRecord,
}

/// Account creation request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl NewAccount {
    /// Build a regular user account request
    #[must_use]
    pub fn user(email: String, password: String, first_name: String, last_name: String) -> Self {
        Self {
            email,
            password,
            first_name,
            last_name,
            role: "user".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Login response carrying the session token
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
