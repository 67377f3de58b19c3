//! Output formatting for CLI display
//!
//! Formatting helpers for gallery entries plus the [`OutputWriter`] and
//! [`NoticeBoard`] used to surface results and notifications.

pub mod notices;
pub mod writer;

pub use notices::{MessageLevel, Notice, NoticeBoard};
pub use writer::{OutputWriter, StdoutWriter};

use crate::models::{FileRecord, MediaKind};
use crate::tags::join_tags;
use byte_unit::{Byte, UnitType};
use chrono::Local;
use colored::Colorize;

/// Human-readable size, binary units
#[must_use]
pub fn format_size(bytes: u64) -> String {
    Byte::from_u64(bytes)
        .get_appropriate_unit(UnitType::Binary)
        .to_string()
}

/// Format a gallery entry for display
///
/// Quiet mode prints only the id so output can be piped into other commands.
#[must_use]
pub fn file_line(record: &FileRecord, quiet: bool) -> String {
    if quiet {
        return record.id.clone();
    }

    let kind = match record.media_kind() {
        MediaKind::Image => MediaKind::Image.label().cyan(),
        MediaKind::Video => MediaKind::Video.label().magenta(),
        MediaKind::Other => MediaKind::Other.label().normal(),
    };
    let tags = if record.tags.is_empty() {
        "(no tags)".dimmed().to_string()
    } else {
        format!("[{}]", join_tags(&record.tags))
    };
    let shared = if record.is_shared { " shared".green().to_string() } else { String::new() };

    format!(
        "{:>3}. {} {} ({}, {}, {} views){} {}\n     {}",
        record.order,
        record.name.bold(),
        kind,
        format_size(record.size_bytes),
        record.uploaded_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        record.view_count,
        shared,
        tags,
        record.id.dimmed(),
    )
}
