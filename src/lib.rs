//! Mediashelf - a client for a remote media library
//!
//! This library holds the client-side state of a media gallery: the ordered
//! list of uploaded files, per-file tag editing, drag-style reordering, share
//! links, and a staging area for batched uploads. Persistence lives on a
//! remote file-storage service reached through the [`api::FileStorage`] trait.

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod gallery;
pub mod models;
pub mod output;
pub mod session;
pub mod staging;
pub mod tags;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Remote API error
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),
    /// Session token store error
    #[error("Session error: {0}")]
    Session(#[from] session::SessionError),
    /// Upload staging error
    #[error("Upload error: {0}")]
    Staging(#[from] staging::StagingError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// No file with this id in the gallery
    #[error("File not found: {0}")]
    UnknownFile(String),
    /// A remote operation failed and was already shown to the user
    #[error("{0}")]
    Reported(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ShelfError {
    /// Whether the failure has already been printed as a notice
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::Reported(_))
    }

    /// Whether the server rejected the request for lack of a valid session
    #[must_use]
    pub fn needs_sign_in(&self) -> bool {
        match self {
            Self::Api(e) | Self::Staging(staging::StagingError::Upload(e)) => e.is_unauthorized(),
            _ => false,
        }
    }
}
