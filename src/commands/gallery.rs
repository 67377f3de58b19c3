//! Gallery commands - list, tag, move, share and view files

use crate::api::FileStorage;
use crate::gallery::{
    ClipboardSink, GalleryController, LoadOutcome, RecordUpdate, ReorderOutcome, ShareOutcome,
    TagCommit,
};
use crate::output::{self, OutputWriter};
use crate::tags::join_tags;
use crate::ShelfError;

type Result<T> = std::result::Result<T, ShelfError>;

/// Load the gallery from `storage`
///
/// # Errors
/// Returns `ShelfError::Reported` if the file list cannot be fetched.
pub fn open<S: FileStorage>(
    storage: S,
    share_base: &str,
    output: &dyn OutputWriter,
) -> Result<GalleryController<S>> {
    let mut controller = GalleryController::new(storage, share_base);
    let outcome = controller.load();
    flush(&mut controller, output);
    match outcome {
        LoadOutcome::Loaded(_) => Ok(controller),
        LoadOutcome::Failed(e) => Err(ShelfError::Reported(e)),
    }
}

/// Print every file in display order
pub fn list<S: FileStorage>(controller: &GalleryController<S>, output: &dyn OutputWriter, quiet: bool) {
    let gallery = controller.gallery();
    if gallery.is_empty() {
        output.info("No files yet. Add some with 'mediashelf upload <FILE>...'");
        return;
    }

    for file in gallery.files() {
        output.write(&output::file_line(file, quiet));
    }
}

/// Replace a file's tags from raw comma-separated text
///
/// # Errors
/// * `ShelfError::UnknownFile` if `id` is not in the gallery
/// * `ShelfError::Reported` if the update is rejected
pub fn tag<S: FileStorage>(
    controller: &mut GalleryController<S>,
    id: &str,
    raw: &str,
    output: &dyn OutputWriter,
) -> Result<()> {
    if !controller.input_tags(id, raw) {
        return Err(ShelfError::UnknownFile(id.to_string()));
    }

    let commit = controller.commit_tags(id);
    flush(controller, output);
    match commit {
        TagCommit::Saved(tags) => {
            output.info(&format!("{id}: {}", join_tags(&tags)));
            Ok(())
        }
        TagCommit::Unchanged | TagCommit::NoDraft => {
            output.info("Tags unchanged");
            Ok(())
        }
        TagCommit::UnknownFile => Err(ShelfError::UnknownFile(id.to_string())),
        TagCommit::Failed(e) => {
            if let Some(draft) = controller.tags_text(id) {
                output.info(&format!("Unsaved tags: {draft}"));
            }
            Err(ShelfError::Reported(e))
        }
    }
}

/// Swap the positions of `source` and `target`
///
/// # Errors
/// * `ShelfError::InvalidInput` if the ids are equal or not in the gallery
/// * `ShelfError::Reported` if any position could not be saved
pub fn move_file<S: FileStorage>(
    controller: &mut GalleryController<S>,
    source: &str,
    target: &str,
    output: &dyn OutputWriter,
) -> Result<()> {
    let outcome = controller.reorder(source, target);
    flush(controller, output);
    match outcome {
        ReorderOutcome::Ignored => Err(ShelfError::InvalidInput(format!(
            "Cannot move '{source}' onto '{target}': both must be different files in the gallery"
        ))),
        ReorderOutcome::Applied { sent, failed } => {
            for step in &sent {
                output.info(&format!("{} -> position {}", step.id, step.order));
            }
            if failed.is_empty() {
                Ok(())
            } else {
                let ids: Vec<&str> = failed.iter().map(|f| f.id.as_str()).collect();
                Err(ShelfError::Reported(format!("positions not saved for {}", ids.join(", "))))
            }
        }
    }
}

/// Turn sharing of a file on or off, printing the link when on
///
/// # Errors
/// * `ShelfError::UnknownFile` if `id` is not in the gallery
/// * `ShelfError::Reported` if the update is rejected
pub fn share<S: FileStorage>(
    controller: &mut GalleryController<S>,
    id: &str,
    shared: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    let outcome = controller.set_shared(id, shared);
    flush(controller, output);
    match outcome {
        RecordUpdate::Updated(_) => {
            if shared && let Some(link) = controller.share_link(id) {
                output.write(&link);
            }
            Ok(())
        }
        RecordUpdate::UnknownFile => Err(ShelfError::UnknownFile(id.to_string())),
        RecordUpdate::Failed(e) => Err(ShelfError::Reported(e)),
    }
}

/// Copy (or print) a file's share link
///
/// # Errors
/// * `ShelfError::UnknownFile` if `id` is not in the gallery
/// * `ShelfError::Reported` if the clipboard cannot be written
pub fn copy_link<S: FileStorage>(
    controller: &mut GalleryController<S>,
    id: &str,
    print: bool,
    clipboard: &mut dyn ClipboardSink,
    output: &dyn OutputWriter,
) -> Result<()> {
    let Some(file) = controller.gallery().get(id) else {
        return Err(ShelfError::UnknownFile(id.to_string()));
    };
    if !file.is_shared {
        output.warning(&format!(
            "'{}' is not shared; the link will not open until you run 'mediashelf share {id}'",
            file.name
        ));
    }

    if print {
        if let Some(link) = controller.share_link(id) {
            output.write(&link);
        }
        return Ok(());
    }

    let outcome = controller.copy_share_link(id, clipboard);
    flush(controller, output);
    match outcome {
        ShareOutcome::Copied(link) => {
            output.info(&link);
            Ok(())
        }
        ShareOutcome::UnknownFile => Err(ShelfError::UnknownFile(id.to_string())),
        ShareOutcome::Failed(e) => Err(ShelfError::Reported(e)),
    }
}

/// Count one view of a file
///
/// # Errors
/// * `ShelfError::UnknownFile` if `id` is not in the gallery
/// * `ShelfError::Reported` if the update is rejected
pub fn view<S: FileStorage>(
    controller: &mut GalleryController<S>,
    id: &str,
    output: &dyn OutputWriter,
) -> Result<()> {
    let outcome = controller.record_view(id);
    flush(controller, output);
    match outcome {
        RecordUpdate::Updated(file) => {
            output.success(&format!("{} has {} views", file.name, file.view_count));
            Ok(())
        }
        RecordUpdate::UnknownFile => Err(ShelfError::UnknownFile(id.to_string())),
        RecordUpdate::Failed(e) => Err(ShelfError::Reported(e)),
    }
}

fn flush<S: FileStorage>(controller: &mut GalleryController<S>, output: &dyn OutputWriter) {
    for notice in controller.drain_notices() {
        output.notice(&notice);
    }
}
