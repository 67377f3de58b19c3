//! Per-file tag editing state
//!
//! ```text
//! Confirmed(tags) --input--> Editing { confirmed: tags, draft }
//! Editing --commit, unchanged--> Confirmed(tags)
//! Editing --commit, saved------> Confirmed(new)
//! Editing --commit, failed-----> Editing (draft kept, confirmed unchanged)
//! ```

use crate::tags::{join_tags, normalize_tags, same_tags};

/// Tag editing state of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEdit {
    /// Tags known to match the server
    Confirmed(Vec<String>),
    /// Unsaved text typed over a confirmed baseline
    Editing { confirmed: Vec<String>, draft: String },
}

/// What a commit needs to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitPlan {
    /// Nothing typed since the last confirmation
    NoDraft,
    /// Draft normalizes to the confirmed tags; no request
    Unchanged,
    /// Draft differs; send these tags
    Send(Vec<String>),
}

impl TagEdit {
    /// Last tags known to match the server
    #[must_use]
    pub fn confirmed(&self) -> &[String] {
        match self {
            Self::Confirmed(tags) | Self::Editing { confirmed: tags, .. } => tags,
        }
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Text shown in the tag field: the draft while editing, else the tags
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Confirmed(tags) => join_tags(tags),
            Self::Editing { draft, .. } => draft.clone(),
        }
    }

    /// Replace the draft; the latest keystroke wins
    #[must_use]
    pub fn input(self, raw: &str) -> Self {
        let confirmed = match self {
            Self::Confirmed(tags) | Self::Editing { confirmed: tags, .. } => tags,
        };
        Self::Editing { confirmed, draft: raw.to_string() }
    }

    /// Decide what committing the current draft requires
    #[must_use]
    pub fn plan_commit(&self) -> CommitPlan {
        match self {
            Self::Confirmed(_) => CommitPlan::NoDraft,
            Self::Editing { confirmed, draft } => {
                let normalized = normalize_tags(draft);
                if same_tags(&normalized, confirmed) {
                    CommitPlan::Unchanged
                } else {
                    CommitPlan::Send(normalized)
                }
            }
        }
    }
}
