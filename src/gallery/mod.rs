//! Gallery state: ordering, tag editing and sharing
//!
//! # Architecture
//!
//! - **`Gallery`**: immutable snapshot of the ordered file list
//! - **`TagEdit`**: per-file tag editing state machine
//! - **`GalleryController`**: owns both and talks to the remote store
//! - **`share_link` / `ClipboardSink`**: public link building and copying

pub mod controller;
pub mod edit;
pub mod share;
pub mod snapshot;

pub use controller::{
    GalleryController, LoadOutcome, SIGN_IN_HINT, OrderFailure, RecordUpdate, ReorderOutcome, ShareOutcome,
    TagCommit,
};
pub use edit::{CommitPlan, TagEdit};
pub use share::{ClipboardSink, SystemClipboard, VIEW_PATH, share_link};
pub use snapshot::{Gallery, OrderMove, SwapPlan};
