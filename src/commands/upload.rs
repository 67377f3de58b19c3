//! Upload command - stage local files with tags and send them in one batch

use crate::api::FileStorage;
use crate::output::OutputWriter;
use crate::staging::{PendingUpload, StagingError, UploadStaging};
use crate::ShelfError;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ShelfError>;

/// Answer for one staged file during interactive review
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Review {
    Keep,
    Tags(String),
    Drop,
}

/// Stage `files`, apply tags, optionally review them, then upload
///
/// Returns the number of files uploaded.
///
/// # Errors
/// * `ShelfError::Staging` if nothing is left to upload or the upload fails
/// * `ShelfError::InvalidInput` if interactive prompts cannot be read
pub fn execute(
    storage: &dyn FileStorage,
    files: Vec<PathBuf>,
    tags: Option<&str>,
    interactive: bool,
    output: &dyn OutputWriter,
) -> Result<usize> {
    let mut staging = stage(files, tags, output)?;

    if interactive {
        review(&mut staging, prompt_review)?;
        if staging.is_empty() {
            return Err(StagingError::Empty.into());
        }
        let go = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Upload {} file(s)?", staging.len()))
            .default(true)
            .interact()
            .map_err(|e| ShelfError::InvalidInput(format!("Failed to read input: {e}")))?;
        if !go {
            output.info("Upload cancelled");
            return Ok(0);
        }
        return submit_with_retry(&mut staging, storage, output, prompt_retry);
    }

    submit(&mut staging, storage, output)
}

/// Build the staging list, dropping paths that are not readable files
///
/// # Errors
/// Returns `ShelfError::Staging` if a tag position is out of range.
pub fn stage(
    files: Vec<PathBuf>,
    tags: Option<&str>,
    output: &dyn OutputWriter,
) -> Result<UploadStaging> {
    let (present, missing): (Vec<PathBuf>, Vec<PathBuf>) =
        files.into_iter().partition(|path| path.is_file());
    for path in &missing {
        output.warning(&format!("Skipping {}: not a file", path.display()));
    }

    let mut staging = UploadStaging::new();
    staging.add(present);
    if let Some(raw) = tags {
        for index in 0..staging.len() {
            staging.set_tags(index, raw)?;
        }
    }
    Ok(staging)
}

/// Walk the staged files, asking `ask` what to do with each
///
/// # Errors
/// Propagates errors from `ask`.
pub fn review<F>(staging: &mut UploadStaging, mut ask: F) -> Result<()>
where
    F: FnMut(&PendingUpload) -> Result<Review>,
{
    let mut index = 0;
    while index < staging.len() {
        match ask(&staging.entries()[index])? {
            Review::Keep => index += 1,
            Review::Tags(raw) => {
                staging.set_tags(index, &raw)?;
                index += 1;
            }
            Review::Drop => {
                staging.remove(index)?;
            }
        }
    }
    Ok(())
}

/// Send the staged batch and report the result
///
/// # Errors
/// Returns `ShelfError::Staging` if nothing is staged or the upload fails;
/// the staged entries are kept in that case.
pub fn submit(
    staging: &mut UploadStaging,
    storage: &dyn FileStorage,
    output: &dyn OutputWriter,
) -> Result<usize> {
    let count = staging.submit(storage)?;
    output.success(&format!("Uploaded {count} file(s)"));
    Ok(count)
}

/// Send the staged batch, asking `retry` whether to try again after a failure
///
/// The same staged entries are resent on every attempt. An unauthorized
/// failure is returned straight away since resending cannot fix it.
///
/// # Errors
/// Returns `ShelfError::Reported` once `retry` declines (the failure has
/// been shown already), `ShelfError::Staging` for an unauthorized failure, or
/// any error from `retry` itself.
pub fn submit_with_retry<F>(
    staging: &mut UploadStaging,
    storage: &dyn FileStorage,
    output: &dyn OutputWriter,
    mut retry: F,
) -> Result<usize>
where
    F: FnMut(&StagingError) -> Result<bool>,
{
    loop {
        match staging.submit(storage) {
            Ok(count) => {
                output.success(&format!("Uploaded {count} file(s)"));
                return Ok(count);
            }
            Err(StagingError::Upload(e)) if e.is_unauthorized() => {
                return Err(StagingError::Upload(e).into());
            }
            Err(e @ StagingError::Upload(_)) => {
                output.error(&e.to_string());
                if !retry(&e)? {
                    return Err(ShelfError::Reported(e.to_string()));
                }
                tracing::info!(count = staging.len(), "retrying upload");
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn prompt_retry(_: &StagingError) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Upload failed, retry?")
        .default(true)
        .interact()
        .map_err(|e| ShelfError::InvalidInput(format!("Failed to read input: {e}")))
}

fn prompt_review(entry: &PendingUpload) -> Result<Review> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Tags for {} ('-' to skip the file)", entry.name()))
        .with_initial_text(entry.tags_text())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ShelfError::InvalidInput(format!("Failed to read input: {e}")))?;

    Ok(match answer.trim() {
        "-" => Review::Drop,
        text if text == entry.tags_text() => Review::Keep,
        _ => Review::Tags(answer),
    })
}
