//! Command implementations
//!
//! Each command is a function that takes parsed CLI args and runs the
//! operation against the remote service, reporting through an
//! [`OutputWriter`](crate::output::OutputWriter).

pub mod auth;
pub mod gallery;
pub mod upload;

// Re-export execute functions for convenience
pub use auth::{login, logout, signup, status};
pub use gallery::{copy_link, list, move_file, open, share, tag, view};
pub use upload::execute as upload;
