//! Folder walking
//!
//! This module contains the orchestrator for one batch run: it validates the
//! source folder, prepares the destination folder, enumerates the source
//! entries, asks the rule engine for a decision per entry, and dispatches
//! the transfers.

use std::ffi::OsStr;
use std::fs::{create_dir_all, read_dir};
use std::path::{Path, PathBuf};

use crate::configuration::RenameJob;
use crate::errors::{
    Result, directory_not_found_error, file_operation_error, invalid_filename_error,
};
use crate::file_ops::{TransferOutcome, transfer};
use crate::logging::Logger;
use crate::rules::{RuleDecision, compute_name, file_extension};

/// One regular-file entry under the source folder
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// The full path to the file
    pub path: PathBuf,
    /// The filename of the file
    pub filename: String,
}

impl FileEntry {
    /// Creates a new FileEntry from a path
    ///
    /// # Errors
    /// Returns an error if the filename cannot be extracted or is not valid
    /// Unicode
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = path
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        Ok(FileEntry { path, filename })
    }

    /// The file extension derived from the filename
    pub fn extension(&self) -> &str {
        file_extension(&self.filename)
    }
}

/// Statistics about one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of entries examined
    pub processed: usize,
    /// Number of files transferred (or planned, in a dry run)
    pub transferred: usize,
    /// Number of files excluded by the extension filter
    pub skipped_filter: usize,
    /// Number of files skipped because the destination already existed
    pub skipped_conflicts: usize,
    /// Number of entries whose source vanished before the transfer
    pub missing_sources: usize,
    /// Number of per-file operation failures
    pub failures: usize,
}

impl RunSummary {
    /// Records the outcome of one entry
    pub fn record(&mut self, outcome: TransferOutcome) {
        self.processed += 1;
        match outcome {
            TransferOutcome::Transferred => self.transferred += 1,
            TransferOutcome::SkippedByFilter => self.skipped_filter += 1,
            TransferOutcome::SkippedExistingDestination => self.skipped_conflicts += 1,
            TransferOutcome::SkippedMissingSource => self.missing_sources += 1,
        }
    }

    /// Records a per-file operation failure
    pub fn record_failure(&mut self) {
        self.processed += 1;
        self.failures += 1;
    }
}

/// Runs one batch job
///
/// The walk is a single linear pass:
/// 1. Validate the source folder; a missing folder aborts the run before any
///    file is touched.
/// 2. Create the destination folder (with parents) if one is set and absent.
/// 3. Snapshot the source entries, keeping regular files only, and sort them
///    by filename. Sorting is an added guarantee over the OS enumeration
///    order so runs are reproducible.
/// 4. Per entry, ask the rule engine for a decision and transfer the file
///    under its new name. A skipped or failed entry never aborts the run.
///
/// # Arguments
/// * `job` - The run configuration
/// * `logger` - Sink for every outcome of the run
///
/// # Returns
/// * `Result<RunSummary>` - Per-outcome counts for the completed run
///
/// # Errors
/// Returns an error if the source folder is not an existing directory, or if
/// the destination folder cannot be created
pub fn process_folder(job: &RenameJob, logger: &Logger) -> Result<RunSummary> {
    if !job.source_dir().is_dir() {
        logger.error(&format!(
            "Invalid folder path: '{}'",
            job.source_dir().display()
        ));
        return Err(directory_not_found_error(job.source_dir().to_path_buf()));
    }

    if let Some(target_dir) = job.target_dir()
        && !target_dir.exists()
    {
        if job.dry_run() {
            logger.info(&format!("Would create folder '{}'", target_dir.display()));
        } else {
            create_dir_all(target_dir).map_err(|e| {
                let error = file_operation_error(e, target_dir.to_path_buf(), "create directory");
                logger.error(&format!("{error}"));
                error
            })?;
        }
    }

    let entries = collect_entries(job.source_dir(), logger)?;

    logger.info(&format!(
        "Processing {} files in '{}'{}",
        entries.len(),
        job.source_dir().display(),
        if job.dry_run() { " (dry run)" } else { "" }
    ));

    let mut summary = RunSummary::default();

    for entry in &entries {
        match compute_name(&entry.filename, job) {
            RuleDecision::Skip => summary.record(TransferOutcome::SkippedByFilter),
            RuleDecision::Rename(new_name) => {
                let target = job
                    .target_dir()
                    .unwrap_or_else(|| job.source_dir())
                    .join(&new_name);

                match transfer(
                    &entry.path,
                    &target,
                    job.copy_mode(),
                    job.overwrite(),
                    !job.dry_run(),
                    logger,
                ) {
                    Ok(outcome) => summary.record(outcome),
                    Err(error) => {
                        logger.error(&format!("{error}"));
                        summary.record_failure();
                    }
                }
            }
        }
    }

    logger.info(&format!(
        "Finished processing {} files: {} transferred, {} filtered, {} conflicts, {} missing, {} failed",
        summary.processed,
        summary.transferred,
        summary.skipped_filter,
        summary.skipped_conflicts,
        summary.missing_sources,
        summary.failures
    ));

    Ok(summary)
}

/// Snapshots the regular files of the source folder, sorted by filename
///
/// Entries whose names are not valid Unicode are logged and skipped.
fn collect_entries(source_dir: &Path, logger: &Logger) -> Result<Vec<FileEntry>> {
    let dir_entries = read_dir(source_dir).map_err(|e| {
        let error = file_operation_error(e, source_dir.to_path_buf(), "read directory");
        logger.error(&format!("{error}"));
        error
    })?;

    let mut entries: Vec<FileEntry> = Vec::new();
    for dir_entry in dir_entries.filter_map(std::result::Result::ok) {
        let path = dir_entry.path();
        if !path.is_file() {
            continue;
        }
        match FileEntry::new(path) {
            Ok(entry) => entries.push(entry),
            Err(error) => logger.error(&format!("{error}")),
        }
    }

    entries.sort_by(|a, b| a.filename.cmp(&b.filename));

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_from_path() {
        let entry = FileEntry::new(PathBuf::from("/tmp/source/scene.ma")).unwrap();

        assert_eq!(entry.filename, "scene.ma");
        assert_eq!(entry.extension(), "ma");
    }

    #[test]
    fn test_file_entry_without_extension() {
        let entry = FileEntry::new(PathBuf::from("/tmp/source/README")).unwrap();

        assert_eq!(entry.filename, "README");
        assert_eq!(entry.extension(), "");
    }

    #[test]
    fn test_summary_records_each_outcome_once() {
        let mut summary = RunSummary::default();

        summary.record(TransferOutcome::Transferred);
        summary.record(TransferOutcome::SkippedByFilter);
        summary.record(TransferOutcome::SkippedExistingDestination);
        summary.record(TransferOutcome::SkippedMissingSource);
        summary.record_failure();

        assert_eq!(summary.processed, 5);
        assert_eq!(summary.transferred, 1);
        assert_eq!(summary.skipped_filter, 1);
        assert_eq!(summary.skipped_conflicts, 1);
        assert_eq!(summary.missing_sources, 1);
        assert_eq!(summary.failures, 1);
    }
}
