//! File operation functionality
//!
//! This module contains the guarded transfer of a single file: a copy or
//! move from a source path to a destination path, protected by the
//! missing-source and overwrite guards.

use std::path::Path;

use fs_extra::file::{CopyOptions, copy, move_file};

use crate::errors::{Result, file_operation_error};
use crate::logging::Logger;

/// Per-file result of a transfer attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The file was copied or moved (or would be, in a dry run)
    Transferred,
    /// The extension filter excluded the file
    SkippedByFilter,
    /// The destination already exists and overwriting is not allowed
    SkippedExistingDestination,
    /// The source is no longer a regular file
    SkippedMissingSource,
}

/// Transfers one file from `source` to `target`
///
/// The existing destination file is left byte-for-byte unchanged when the
/// overwrite guard fires. With `execute` false the guards still run but the
/// filesystem is not touched; the planned operation is logged instead.
///
/// # Arguments
/// * `source` - Full path of a file that should already exist
/// * `target` - Full path for the new name
/// * `copy_mode` - Copy instead of moving
/// * `force` - Allow overwriting an existing destination file
/// * `execute` - Whether to actually perform the file operation
/// * `logger` - Sink for the outcome
///
/// # Errors
/// Returns an error if the underlying copy or move fails; source and
/// destination are left in their pre-call state.
pub fn transfer(
    source: &Path,
    target: &Path,
    copy_mode: bool,
    force: bool,
    execute: bool,
    logger: &Logger,
) -> Result<TransferOutcome> {
    if !source.is_file() {
        logger.error(&format!("File '{}' does not exist.", source.display()));
        return Ok(TransferOutcome::SkippedMissingSource);
    }

    if target.is_file() && !force {
        logger.error(&format!("File '{}' already exists.", target.display()));
        return Ok(TransferOutcome::SkippedExistingDestination);
    }

    // A forced transfer onto the same path would copy the file over itself
    if source == target {
        logger.info(&format!(
            "File '{}' already has the requested name",
            source.display()
        ));
        return Ok(TransferOutcome::Transferred);
    }

    let operation = if copy_mode { "copy" } else { "move" };

    if !execute {
        logger.info(&format!(
            "Would {} '{}' to '{}'",
            operation,
            source.display(),
            target.display()
        ));
        return Ok(TransferOutcome::Transferred);
    }

    let options = CopyOptions::new().overwrite(force);

    if copy_mode {
        copy(source, target, &options).map_err(|e| {
            file_operation_error(std::io::Error::other(e), source.to_path_buf(), "copy")
        })?;
    } else {
        move_file(source, target, &options).map_err(|e| {
            file_operation_error(std::io::Error::other(e), source.to_path_buf(), "move")
        })?;
    }

    logger.info(&format!(
        "{} '{}' to '{}'",
        if copy_mode { "Copied" } else { "Moved" },
        source.display(),
        target.display()
    ));

    Ok(TransferOutcome::Transferred)
}
