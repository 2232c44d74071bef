//! Run configuration
//!
//! This module defines the immutable parameter set describing one batch run
//! and the builder used to construct it from command-line or caller values.

use std::path::{Path, PathBuf};

/// The full parameter set for one batch run
///
/// A RenameJob is constructed once per invocation, consumed entirely by one
/// walker run, and discarded. No component mutates it once a run starts.
#[derive(Debug, Clone)]
pub struct RenameJob {
    /// The folder whose files are processed
    source_dir: PathBuf,
    /// The folder files are transferred into; None renames in place
    target_dir: Option<PathBuf>,
    /// Copy files instead of moving them
    copy_mode: bool,
    /// Allow overwriting existing destination files
    overwrite: bool,
    /// Allowed file extensions; empty allows every file
    filetypes: Vec<String>,
    /// Substrings to find in filenames, applied longest first
    find_strings: Vec<String>,
    /// Replacement for found substrings
    replace_with: String,
    /// Prefix applied by the Maya scene policy
    prefix: String,
    /// Suffix field, accepted for interface parity; no rule applies it
    suffix: String,
    /// Evaluate rules and guards without touching the filesystem
    dry_run: bool,
}

impl RenameJob {
    /// Creates a new RenameJobBuilder for the given source folder
    pub fn builder(source_dir: &Path) -> RenameJobBuilder {
        RenameJobBuilder::new(source_dir)
    }

    /// Gets the source folder
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Gets the destination folder, if one is set
    pub fn target_dir(&self) -> Option<&Path> {
        self.target_dir.as_deref()
    }

    /// Whether files are copied rather than moved
    pub fn copy_mode(&self) -> bool {
        self.copy_mode
    }

    /// Whether existing destination files may be overwritten
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Gets the allowed file extensions
    pub fn filetypes(&self) -> &[String] {
        &self.filetypes
    }

    /// Gets the substrings searched for in filenames
    pub fn find_strings(&self) -> &[String] {
        &self.find_strings
    }

    /// Gets the replacement string
    pub fn replace_with(&self) -> &str {
        &self.replace_with
    }

    /// Gets the prefix string
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Gets the suffix string
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether this run only plans operations
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Builder for creating RenameJob instances
///
/// This struct follows the builder pattern to provide a more readable
/// and flexible way to create RenameJob instances.
#[derive(Debug, Clone)]
pub struct RenameJobBuilder {
    source_dir: PathBuf,
    target_dir: Option<PathBuf>,
    copy_mode: bool,
    overwrite: bool,
    filetypes: Vec<String>,
    find_strings: Vec<String>,
    replace_with: String,
    prefix: String,
    suffix: String,
    dry_run: bool,
}

impl RenameJobBuilder {
    /// Creates a new builder for the given source folder
    ///
    /// Every other field starts at its default: move files in place, no
    /// overwriting, all filetypes allowed, nothing found or replaced.
    pub fn new(source_dir: &Path) -> RenameJobBuilder {
        RenameJobBuilder {
            source_dir: source_dir.to_path_buf(),
            target_dir: None,
            copy_mode: false,
            overwrite: false,
            filetypes: Vec::new(),
            find_strings: Vec::new(),
            replace_with: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            dry_run: false,
        }
    }

    /// Sets the destination folder
    pub fn target_dir(mut self, target_dir: &Path) -> RenameJobBuilder {
        self.target_dir = Some(target_dir.to_path_buf());
        self
    }

    /// Sets whether files are copied rather than moved
    pub fn copy_mode(mut self, copy_mode: bool) -> RenameJobBuilder {
        self.copy_mode = copy_mode;
        self
    }

    /// Sets whether existing destination files may be overwritten
    pub fn overwrite(mut self, overwrite: bool) -> RenameJobBuilder {
        self.overwrite = overwrite;
        self
    }

    /// Sets the allowed file extensions
    ///
    /// Matching is exact-string and case-sensitive.
    pub fn filetypes<I, S>(mut self, filetypes: I) -> RenameJobBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filetypes = filetypes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the substrings searched for in filenames
    pub fn find_strings<I, S>(mut self, find_strings: I) -> RenameJobBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.find_strings = find_strings.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the replacement string
    pub fn replace_with(mut self, replace_with: &str) -> RenameJobBuilder {
        self.replace_with = replace_with.to_string();
        self
    }

    /// Sets the prefix string
    pub fn prefix(mut self, prefix: &str) -> RenameJobBuilder {
        self.prefix = prefix.to_string();
        self
    }

    /// Sets the suffix string
    pub fn suffix(mut self, suffix: &str) -> RenameJobBuilder {
        self.suffix = suffix.to_string();
        self
    }

    /// Sets whether this run only plans operations
    pub fn dry_run(mut self, dry_run: bool) -> RenameJobBuilder {
        self.dry_run = dry_run;
        self
    }

    /// Builds the RenameJob instance
    ///
    /// Empty find-strings are dropped here: an empty pattern matches between
    /// every pair of characters and would splice the replacement through the
    /// whole filename.
    pub fn build(mut self) -> RenameJob {
        self.find_strings.retain(|pattern| !pattern.is_empty());

        RenameJob {
            source_dir: self.source_dir,
            target_dir: self.target_dir,
            copy_mode: self.copy_mode,
            overwrite: self.overwrite,
            filetypes: self.filetypes,
            find_strings: self.find_strings,
            replace_with: self.replace_with,
            prefix: self.prefix,
            suffix: self.suffix,
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        // Build a job with nothing but the source folder
        let job = RenameJob::builder(Path::new("/tmp/source")).build();

        // Verify every defaulted field
        assert_eq!(job.source_dir(), Path::new("/tmp/source"));
        assert!(job.target_dir().is_none());
        assert!(!job.copy_mode());
        assert!(!job.overwrite());
        assert!(job.filetypes().is_empty());
        assert!(job.find_strings().is_empty());
        assert_eq!(job.replace_with(), "");
        assert_eq!(job.prefix(), "");
        assert_eq!(job.suffix(), "");
        assert!(!job.dry_run());
    }

    #[test]
    fn test_builder_method_chaining() {
        let job = RenameJob::builder(Path::new("/tmp/source"))
            .target_dir(Path::new("/tmp/target"))
            .copy_mode(true)
            .overwrite(true)
            .filetypes(["txt", "png"])
            .find_strings(["old", "draft"])
            .replace_with("new")
            .prefix("FINAL_")
            .suffix("_v2")
            .dry_run(true)
            .build();

        assert_eq!(job.target_dir(), Some(Path::new("/tmp/target")));
        assert!(job.copy_mode());
        assert!(job.overwrite());
        assert_eq!(job.filetypes(), ["txt", "png"]);
        assert_eq!(job.find_strings(), ["old", "draft"]);
        assert_eq!(job.replace_with(), "new");
        assert_eq!(job.prefix(), "FINAL_");
        assert_eq!(job.suffix(), "_v2");
        assert!(job.dry_run());
    }

    #[test]
    fn test_build_drops_empty_find_strings() {
        let job = RenameJob::builder(Path::new("/tmp/source"))
            .find_strings(["", "old", ""])
            .build();

        // Only the non-empty pattern survives
        assert_eq!(job.find_strings(), ["old"]);
    }
}
